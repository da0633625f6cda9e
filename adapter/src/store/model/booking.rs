use kernel::model::{
    booking::Booking,
    id::{BookingId, EventId, UserId},
};

#[derive(Debug, Clone, Copy)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user: UserId,
    pub event: EventId,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user,
            event,
        } = value;
        Booking {
            booking_id,
            user,
            event,
        }
    }
}
