use crate::model::id::{BookingId, EventId, UserId};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user: UserId,
    pub event: EventId,
}
