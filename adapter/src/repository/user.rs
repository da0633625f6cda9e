use anyhow::Context;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::user::UserRow, DocumentStore};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: DocumentStore,
}

impl UserRepositoryImpl {
    async fn ensure_unique(&self, user_id: UserId, username: &str, email: &str) -> AppResult<()> {
        let username_taken = self
            .db
            .users
            .find(|row| row.username == username && row.user_id != user_id)
            .await
            .is_some();
        if username_taken {
            return Err(AppError::UniqueViolation("username".into()));
        }
        let email_taken = self
            .db
            .users
            .find(|row| row.email == email && row.user_id != user_id)
            .await
            .is_some();
        if email_taken {
            return Err(AppError::UniqueViolation("email".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        self.ensure_unique(user_id, &event.username, &event.email)
            .await?;

        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)
            .context("failed to hash password")?;
        let CreateUser {
            username,
            name,
            email,
            password: _,
            description,
            profile_image,
        } = event;
        let row = UserRow {
            user_id,
            username,
            name,
            email,
            description,
            profile_image,
            password_hash,
            events: vec![],
            booked_events: vec![],
            created_groups: vec![],
            groups: vec![],
        };
        self.db.users.put(user_id.raw(), row.clone()).await;

        Ok(User::from(row))
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        self.ensure_unique(user.user_id, &user.username, &user.email)
            .await?;
        let row = self
            .db
            .users
            .get(user.user_id.raw())
            .await
            .ok_or_else(|| AppError::EntityNotFound("this user doesn't exist".into()))?;
        self.db.users.put(user.user_id.raw(), row.updated(user)).await;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.db.users.all().await.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.db.users.get(user_id.raw()).await.map(User::from))
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        self.db.users.remove(user_id.raw()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.into(),
            name: "Marika".into(),
            email: email.into(),
            password: "marika".into(),
            description: String::new(),
            profile_image: None,
        }
    }

    #[tokio::test]
    async fn create_and_find_back() -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(DocumentStore::new());

        let created = repo
            .create(create_user("marika", "marika@example.com"))
            .await?;
        let found = repo.find_by_id(created.user_id).await?;
        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(DocumentStore::new());

        repo.create(create_user("marika", "marika@example.com"))
            .await?;
        let res = repo
            .create(create_user("marika", "other@example.com"))
            .await;
        assert!(matches!(res, Err(AppError::UniqueViolation(field)) if field == "username"));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(DocumentStore::new());

        repo.create(create_user("marika", "marika@example.com"))
            .await?;
        let res = repo.create(create_user("marek", "marika@example.com")).await;
        assert!(matches!(res, Err(AppError::UniqueViolation(field)) if field == "email"));

        Ok(())
    }

    #[tokio::test]
    async fn save_keeps_the_password_hash() -> anyhow::Result<()> {
        let db = DocumentStore::new();
        let repo = UserRepositoryImpl::new(db.clone());

        let mut user = repo
            .create(create_user("marika", "marika@example.com"))
            .await?;
        let hash_before = db.users.get(user.user_id.raw()).await.unwrap().password_hash;

        user.name = "Marika L.".into();
        repo.save(&user).await?;

        let row = db.users.get(user.user_id.raw()).await.unwrap();
        assert_eq!(row.name, "Marika L.");
        assert_eq!(row.password_hash, hash_before);

        Ok(())
    }
}
