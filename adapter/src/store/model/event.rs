use chrono::{DateTime, Utc};
use kernel::model::{
    event::Event,
    id::{EventId, GroupId, UserId},
};

#[derive(Debug, Clone)]
pub struct EventRow {
    pub event_id: EventId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub capacity: i32,
    pub description: String,
    pub place: String,
    pub organizer: UserId,
    pub attendees: Vec<UserId>,
    pub groups: Vec<GroupId>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            title,
            date,
            price,
            capacity,
            description,
            place,
            organizer,
            attendees,
            groups,
        } = value;
        Event {
            event_id,
            title,
            date,
            price,
            capacity,
            description,
            place,
            organizer,
            attendees,
            groups,
        }
    }
}

impl From<&Event> for EventRow {
    fn from(value: &Event) -> Self {
        let Event {
            event_id,
            title,
            date,
            price,
            capacity,
            description,
            place,
            organizer,
            attendees,
            groups,
        } = value.clone();
        EventRow {
            event_id,
            title,
            date,
            price,
            capacity,
            description,
            place,
            organizer,
            attendees,
            groups,
        }
    }
}
