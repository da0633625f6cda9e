use kernel::model::{
    id::{BookingId, EventId, GroupId, UserId},
    user::User,
};

/// Stored shape of a user document. Unlike the kernel model it carries the
/// password hash, which never leaves the adapter.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub profile_image: Option<String>,
    pub password_hash: String,
    pub events: Vec<EventId>,
    pub booked_events: Vec<BookingId>,
    pub created_groups: Vec<GroupId>,
    pub groups: Vec<GroupId>,
}

impl UserRow {
    /// New row for the given user state, keeping this row's password hash.
    pub fn updated(&self, user: &User) -> UserRow {
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
        } = user.clone();
        UserRow {
            user_id,
            username,
            name,
            email,
            description,
            profile_image,
            password_hash: self.password_hash.clone(),
            events,
            booked_events,
            created_groups,
            groups,
        }
    }
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            username,
            name,
            email,
            description,
            profile_image,
            password_hash: _,
            events,
            booked_events,
            created_groups,
            groups,
        } = value;
        User {
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
        }
    }
}
