use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    group::{event::CreateGroup, Group},
    id::{GroupId, UserId},
};

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Persists a new group, enforcing name uniqueness.
    async fn create(&self, event: CreateGroup, creator: UserId) -> AppResult<Group>;
    async fn save(&self, group: &Group) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<Group>>;
    async fn find_by_id(&self, group_id: GroupId) -> AppResult<Option<Group>>;
    async fn delete(&self, group_id: GroupId) -> AppResult<()>;
}
