use kernel::model::{
    group::Group,
    id::{EventId, GroupId, UserId},
};

#[derive(Debug, Clone)]
pub struct GroupRow {
    pub group_id: GroupId,
    pub name: String,
    pub description: String,
    pub creator: UserId,
    pub members: Vec<UserId>,
    pub events: Vec<EventId>,
}

impl From<GroupRow> for Group {
    fn from(value: GroupRow) -> Self {
        let GroupRow {
            group_id,
            name,
            description,
            creator,
            members,
            events,
        } = value;
        Group {
            group_id,
            name,
            description,
            creator,
            members,
            events,
        }
    }
}

impl From<&Group> for GroupRow {
    fn from(value: &Group) -> Self {
        let Group {
            group_id,
            name,
            description,
            creator,
            members,
            events,
        } = value.clone();
        GroupRow {
            group_id,
            name,
            description,
            creator,
            members,
            events,
        }
    }
}
