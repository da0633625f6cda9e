use crate::model::id::{GroupId, UserId};

#[derive(Debug)]
pub struct CreateGroup {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct UpdateGroup {
    pub group_id: GroupId,
    pub requested_user: UserId,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct DeleteGroup {
    pub group_id: GroupId,
    pub requested_user: UserId,
}
