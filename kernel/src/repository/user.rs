use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{event::CreateUser, User},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user, enforcing username and email uniqueness.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    /// Saves the current state of an existing user document.
    async fn save(&self, user: &User) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
}
