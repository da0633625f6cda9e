use crate::model::id::{BookingId, EventId, GroupId, UserId};

pub mod event;

use event::UpdateUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub profile_image: Option<String>,
    /// Events this user organizes.
    pub events: Vec<EventId>,
    /// Bookings this user holds.
    pub booked_events: Vec<BookingId>,
    /// Groups this user created.
    pub created_groups: Vec<GroupId>,
    /// Groups this user joined.
    pub groups: Vec<GroupId>,
}

impl User {
    /// Applies a partial update. A field present in the request is applied
    /// even when it holds a falsy value such as an empty string.
    pub fn apply_update(&mut self, update: UpdateUser) {
        let UpdateUser {
            user_id: _,
            username,
            name,
            email,
            description,
            profile_image,
        } = update;
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(profile_image) = profile_image {
            self.profile_image = Some(profile_image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            user_id: UserId::new(),
            username: "marika".into(),
            name: "Marika".into(),
            email: "marika@example.com".into(),
            description: "hello".into(),
            profile_image: None,
            events: vec![],
            booked_events: vec![],
            created_groups: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let mut user = user();
        user.apply_update(UpdateUser {
            user_id: user.user_id,
            username: None,
            name: Some("Marika L.".into()),
            email: None,
            description: None,
            profile_image: None,
        });
        assert_eq!(user.name, "Marika L.");
        assert_eq!(user.username, "marika");
        assert_eq!(user.email, "marika@example.com");
    }

    #[test]
    fn present_empty_string_is_applied() {
        let mut user = user();
        user.apply_update(UpdateUser {
            user_id: user.user_id,
            username: None,
            name: None,
            email: None,
            description: Some(String::new()),
            profile_image: None,
        });
        assert_eq!(user.description, "");
    }
}
