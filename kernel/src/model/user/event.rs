use crate::model::id::UserId;

#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: String,
    pub profile_image: Option<String>,
}

#[derive(Debug)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}
