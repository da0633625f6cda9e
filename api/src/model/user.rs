use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{BookingId, EventId, GroupId, UserId},
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(skip)]
    #[serde(default)]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Groups the new user joins right away.
    #[garde(skip)]
    #[serde(default)]
    pub groups: Vec<GroupId>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            name,
            email,
            password,
            description,
            profile_image,
            groups: _,
        } = value;
        CreateUser {
            username,
            name,
            email,
            password,
            description,
            profile_image,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[garde(inner(length(min = 1)))]
    pub username: Option<String>,
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub profile_image: Option<String>,
}

#[derive(new)]
pub struct UpdateUserRequestWithId(UserId, UpdateUserRequest);

impl From<UpdateUserRequestWithId> for UpdateUser {
    fn from(value: UpdateUserRequestWithId) -> Self {
        let UpdateUserRequestWithId(
            user_id,
            UpdateUserRequest {
                username,
                name,
                email,
                description,
                profile_image,
            },
        ) = value;
        UpdateUser {
            user_id,
            username,
            name,
            email,
            description,
            profile_image,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub profile_image: Option<String>,
    pub events: Vec<EventId>,
    pub booked_events: Vec<BookingId>,
    pub created_groups: Vec<GroupId>,
    pub groups: Vec<GroupId>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            username,
            name,
            email,
            description,
            profile_image,
            events,
            booked_events,
            created_groups,
            groups,
        } = value;
        Self {
            id: user_id,
            username,
            name,
            email,
            description,
            profile_image,
            events,
            booked_events,
            created_groups,
            groups,
        }
    }
}
