use chrono::{DateTime, Utc};

use crate::model::id::{EventId, GroupId, UserId};

pub mod event;

use event::UpdateEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub capacity: i32,
    pub description: String,
    pub place: String,
    /// Owning reference: the user who organizes this event.
    pub organizer: UserId,
    pub attendees: Vec<UserId>,
    pub groups: Vec<GroupId>,
}

impl Event {
    /// Applies the scalar fields of a partial update. The `groups` relation is
    /// reconciled by the relation maintainer, never here.
    pub fn apply_update(&mut self, update: UpdateEvent) {
        let UpdateEvent {
            event_id: _,
            requested_user: _,
            title,
            date,
            price,
            capacity,
            description,
            place,
            groups: _,
        } = update;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(place) = place {
            self.place = place;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            event_id: EventId::new(),
            title: "First Test Event".into(),
            date: Utc::now(),
            price: 9.99,
            capacity: 100,
            description: "First Test Event description".into(),
            place: "Melbourne".into(),
            organizer: UserId::new(),
            attendees: vec![],
            groups: vec![GroupId::new()],
        }
    }

    #[test]
    fn present_zero_price_is_applied() {
        let mut event = event();
        event.apply_update(UpdateEvent {
            event_id: event.event_id,
            requested_user: event.organizer,
            title: None,
            date: None,
            price: Some(0.0),
            capacity: None,
            description: None,
            place: None,
            groups: None,
        });
        assert_eq!(event.price, 0.0);
        assert_eq!(event.title, "First Test Event");
    }

    #[test]
    fn groups_are_not_touched_by_scalar_update() {
        let mut event = event();
        let groups_before = event.groups.clone();
        event.apply_update(UpdateEvent {
            event_id: event.event_id,
            requested_user: event.organizer,
            title: Some("renamed".into()),
            date: None,
            price: None,
            capacity: None,
            description: None,
            place: None,
            groups: Some(vec![]),
        });
        assert_eq!(event.groups, groups_before);
    }
}
