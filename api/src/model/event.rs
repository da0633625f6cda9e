use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event,
    },
    id::{EventId, GroupId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 3))]
    pub title: String,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(range(min = 0.0))]
    #[serde(default)]
    pub price: f64,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(length(min = 10))]
    pub description: String,
    #[garde(length(min = 1))]
    pub place: String,
    #[garde(skip)]
    #[serde(default)]
    pub groups: Vec<GroupId>,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            title,
            date,
            price,
            capacity,
            description,
            place,
            groups,
        } = value;
        CreateEvent {
            title,
            date,
            price,
            capacity,
            description,
            place,
            groups,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[garde(inner(length(min = 3)))]
    pub title: Option<String>,
    #[garde(skip)]
    pub date: Option<DateTime<Utc>>,
    #[garde(inner(range(min = 0.0)))]
    pub price: Option<f64>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
    #[garde(inner(length(min = 10)))]
    pub description: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub place: Option<String>,
    #[garde(skip)]
    pub groups: Option<Vec<GroupId>>,
}

#[derive(new)]
pub struct UpdateEventRequestWithIds(EventId, UserId, UpdateEventRequest);

impl From<UpdateEventRequestWithIds> for UpdateEvent {
    fn from(value: UpdateEventRequestWithIds) -> Self {
        let UpdateEventRequestWithIds(
            event_id,
            requested_user,
            UpdateEventRequest {
                title,
                date,
                price,
                capacity,
                description,
                place,
                groups,
            },
        ) = value;
        UpdateEvent {
            event_id,
            requested_user,
            title,
            date,
            price,
            capacity,
            description,
            place,
            groups,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub items: Vec<EventResponse>,
}

impl From<Vec<Event>> for EventsResponse {
    fn from(value: Vec<Event>) -> Self {
        Self {
            items: value.into_iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
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

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
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
        } = value;
        Self {
            id: event_id,
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
