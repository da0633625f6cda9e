use derive_new::new;
use garde::Validate;
use kernel::model::{
    group::{
        event::{CreateGroup, UpdateGroup},
        Group,
    },
    id::{EventId, GroupId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
}

impl From<CreateGroupRequest> for CreateGroup {
    fn from(value: CreateGroupRequest) -> Self {
        let CreateGroupRequest { name, description } = value;
        CreateGroup { name, description }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
}

#[derive(new)]
pub struct UpdateGroupRequestWithIds(GroupId, UserId, UpdateGroupRequest);

impl From<UpdateGroupRequestWithIds> for UpdateGroup {
    fn from(value: UpdateGroupRequestWithIds) -> Self {
        let UpdateGroupRequestWithIds(group_id, requested_user, UpdateGroupRequest {
            name,
            description,
        }) = value;
        UpdateGroup {
            group_id,
            requested_user,
            name,
            description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsResponse {
    pub items: Vec<GroupResponse>,
}

impl From<Vec<Group>> for GroupsResponse {
    fn from(value: Vec<Group>) -> Self {
        Self {
            items: value.into_iter().map(GroupResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub creator: UserId,
    pub members: Vec<UserId>,
    pub events: Vec<EventId>,
}

impl From<Group> for GroupResponse {
    fn from(value: Group) -> Self {
        let Group {
            group_id,
            name,
            description,
            creator,
            members,
            events,
        } = value;
        Self {
            id: group_id,
            name,
            description,
            creator,
            members,
            events,
        }
    }
}
