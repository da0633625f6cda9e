use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::Booking,
    id::{BookingId, EventId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use crate::store::{model::booking::BookingRow, DocumentStore};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: DocumentStore,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, user_id: UserId, event_id: EventId) -> AppResult<Booking> {
        let row = BookingRow {
            booking_id: BookingId::new(),
            user: user_id,
            event: event_id,
        };
        self.db.bookings.put(row.booking_id.raw(), row).await;
        Ok(Booking::from(row))
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self
            .db
            .bookings
            .all()
            .await
            .into_iter()
            .map(Booking::from)
            .collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self
            .db
            .bookings
            .get(booking_id.raw())
            .await
            .map(Booking::from))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(self
            .db
            .bookings
            .filter(|row| row.user == user_id)
            .await
            .into_iter()
            .map(Booking::from)
            .collect())
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Booking>> {
        Ok(self
            .db
            .bookings
            .filter(|row| row.event == event_id)
            .await
            .into_iter()
            .map(Booking::from)
            .collect())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        self.db.bookings.remove(booking_id.raw()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookups_by_user_and_event() -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(DocumentStore::new());
        let user_id = UserId::new();
        let event_id = EventId::new();

        let booking = repo.create(user_id, event_id).await?;
        repo.create(UserId::new(), event_id).await?;

        assert_eq!(repo.find_by_user_id(user_id).await?, vec![booking]);
        assert_eq!(repo.find_by_event_id(event_id).await?.len(), 2);

        repo.delete(booking.booking_id).await?;
        assert_eq!(repo.find_by_id(booking.booking_id).await?, None);

        Ok(())
    }
}
