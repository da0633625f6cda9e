use crate::model::id::{EventId, GroupId, UserId};

pub mod event;

use event::UpdateGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub group_id: GroupId,
    pub name: String,
    pub description: String,
    /// Owning reference: the user who created this group.
    pub creator: UserId,
    pub members: Vec<UserId>,
    pub events: Vec<EventId>,
}

impl Group {
    pub fn apply_update(&mut self, update: UpdateGroup) {
        let UpdateGroup {
            group_id: _,
            requested_user: _,
            name,
            description,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}
