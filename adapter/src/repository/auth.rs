use anyhow::Context;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::store::DocumentStore;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: DocumentStore,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        let row = self
            .db
            .users
            .find(|row| row.username == username)
            .await
            .ok_or(AppError::UnauthenticatedError)?;

        let valid = bcrypt::verify(password, &row.password_hash)
            .context("failed to verify password")?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.db
            .insert_token(token.clone(), event.user_id, self.ttl)
            .await;
        Ok(AccessToken(token))
    }

    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok(self.db.resolve_token(&access_token.0).await)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.db.remove_token(&access_token.0).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    use crate::repository::user::UserRepositoryImpl;

    use super::*;

    async fn registered_user(db: &DocumentStore) -> UserId {
        let users = UserRepositoryImpl::new(db.clone());
        users
            .create(CreateUser {
                username: "marika".into(),
                name: "Marika".into(),
                email: "marika@example.com".into(),
                password: "marika".into(),
                description: String::new(),
                profile_image: None,
            })
            .await
            .unwrap()
            .user_id
    }

    #[tokio::test]
    async fn login_round_trip() -> anyhow::Result<()> {
        let db = DocumentStore::new();
        let user_id = registered_user(&db).await;
        let repo = AuthRepositoryImpl::new(db, 3600);

        let verified = repo.verify_user("marika", "marika").await?;
        assert_eq!(verified, user_id);

        let token = repo.create_token(CreateToken::new(user_id)).await?;
        assert_eq!(repo.fetch_user_id_from_token(&token).await?, Some(user_id));

        repo.delete_token(token.clone()).await?;
        assert_eq!(repo.fetch_user_id_from_token(&token).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_is_unauthenticated() {
        let db = DocumentStore::new();
        registered_user(&db).await;
        let repo = AuthRepositoryImpl::new(db, 3600);

        let res = repo.verify_user("marika", "wrong").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() -> anyhow::Result<()> {
        let db = DocumentStore::new();
        let user_id = registered_user(&db).await;
        let repo = AuthRepositoryImpl::new(db, 0);

        let token = repo.create_token(CreateToken::new(user_id)).await?;
        assert_eq!(repo.fetch_user_id_from_token(&token).await?, None);

        Ok(())
    }
}
