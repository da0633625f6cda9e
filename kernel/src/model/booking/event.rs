use crate::model::id::{BookingId, UserId};

#[derive(Debug)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
}
