use chrono::{DateTime, Utc};

use crate::model::id::{EventId, GroupId, UserId};

#[derive(Debug)]
pub struct CreateEvent {
    pub title: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub capacity: i32,
    pub description: String,
    pub place: String,
    pub groups: Vec<GroupId>,
}

#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub place: Option<String>,
    pub groups: Option<Vec<GroupId>>,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
    pub requested_user: UserId,
}
