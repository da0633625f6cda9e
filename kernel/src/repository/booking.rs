use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::Booking,
    id::{BookingId, EventId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, user_id: UserId, event_id: EventId) -> AppResult<Booking>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Booking>>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<()>;
}
