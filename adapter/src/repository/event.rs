use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::AppResult;

use crate::store::{model::event::EventRow, DocumentStore};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: DocumentStore,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent, organizer: UserId) -> AppResult<Event> {
        let CreateEvent {
            title,
            date,
            price,
            capacity,
            description,
            place,
            groups,
        } = event;
        // The request may repeat a group id; store each one once.
        let mut unique_groups = Vec::with_capacity(groups.len());
        for group_id in groups {
            if !unique_groups.contains(&group_id) {
                unique_groups.push(group_id);
            }
        }
        let row = EventRow {
            event_id: EventId::new(),
            title,
            date,
            price,
            capacity,
            description,
            place,
            organizer,
            attendees: vec![],
            groups: unique_groups,
        };
        self.db.events.put(row.event_id.raw(), row.clone()).await;
        Ok(Event::from(row))
    }

    async fn save(&self, event: &Event) -> AppResult<()> {
        self.db
            .events
            .put(event.event_id.raw(), EventRow::from(event))
            .await;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(self
            .db
            .events
            .all()
            .await
            .into_iter()
            .map(Event::from)
            .collect())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        Ok(self.db.events.get(event_id.raw()).await.map(Event::from))
    }

    async fn delete(&self, event_id: EventId) -> AppResult<()> {
        self.db.events.remove(event_id.raw()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn create_sets_organizer_and_empty_relations() -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(DocumentStore::new());
        let organizer = UserId::new();

        let event = repo
            .create(
                CreateEvent {
                    title: "First Test Event".into(),
                    date: Utc::now(),
                    price: 9.99,
                    capacity: 100,
                    description: "First Test Event description".into(),
                    place: "Melbourne".into(),
                    groups: vec![],
                },
                organizer,
            )
            .await?;

        assert_eq!(event.organizer, organizer);
        assert!(event.attendees.is_empty());

        let found = repo.find_by_id(event.event_id).await?;
        assert_eq!(found, Some(event));

        Ok(())
    }

    #[tokio::test]
    async fn repeated_group_ids_are_stored_once() -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(DocumentStore::new());
        let group_id = kernel::model::id::GroupId::new();

        let event = repo
            .create(
                CreateEvent {
                    title: "First Test Event".into(),
                    date: Utc::now(),
                    price: 9.99,
                    capacity: 100,
                    description: "First Test Event description".into(),
                    place: "Melbourne".into(),
                    groups: vec![group_id, group_id],
                },
                UserId::new(),
            )
            .await?;

        assert_eq!(event.groups, vec![group_id]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_the_document() -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(DocumentStore::new());

        let event = repo
            .create(
                CreateEvent {
                    title: "Second Test Event".into(),
                    date: Utc::now(),
                    price: 0.0,
                    capacity: 10,
                    description: "Second Test Event description".into(),
                    place: "Sydney".into(),
                    groups: vec![],
                },
                UserId::new(),
            )
            .await?;

        repo.delete(event.event_id).await?;
        assert_eq!(repo.find_by_id(event.event_id).await?, None);

        Ok(())
    }
}
