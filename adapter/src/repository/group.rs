use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    group::{event::CreateGroup, Group},
    id::{GroupId, UserId},
};
use kernel::repository::group::GroupRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::group::GroupRow, DocumentStore};

#[derive(new)]
pub struct GroupRepositoryImpl {
    db: DocumentStore,
}

impl GroupRepositoryImpl {
    async fn ensure_unique_name(&self, group_id: GroupId, name: &str) -> AppResult<()> {
        let taken = self
            .db
            .groups
            .find(|row| row.name == name && row.group_id != group_id)
            .await
            .is_some();
        if taken {
            return Err(AppError::UniqueViolation("name".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryImpl {
    async fn create(&self, event: CreateGroup, creator: UserId) -> AppResult<Group> {
        let group_id = GroupId::new();
        self.ensure_unique_name(group_id, &event.name).await?;

        let CreateGroup { name, description } = event;
        let row = GroupRow {
            group_id,
            name,
            description,
            creator,
            members: vec![],
            events: vec![],
        };
        self.db.groups.put(group_id.raw(), row.clone()).await;
        Ok(Group::from(row))
    }

    async fn save(&self, group: &Group) -> AppResult<()> {
        self.ensure_unique_name(group.group_id, &group.name).await?;
        self.db
            .groups
            .put(group.group_id.raw(), GroupRow::from(group))
            .await;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Group>> {
        Ok(self
            .db
            .groups
            .all()
            .await
            .into_iter()
            .map(Group::from)
            .collect())
    }

    async fn find_by_id(&self, group_id: GroupId) -> AppResult<Option<Group>> {
        Ok(self.db.groups.get(group_id.raw()).await.map(Group::from))
    }

    async fn delete(&self, group_id: GroupId) -> AppResult<()> {
        self.db.groups.remove(group_id.raw()).await;
        Ok(())
    }
}
