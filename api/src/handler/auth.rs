use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::auth::event::CreateToken;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::auth::{AccessTokenResponse, LoginRequest},
};

pub async fn login(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.username, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;
    let user = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::UnauthenticatedError)?;

    Ok(Json(AccessTokenResponse {
        token: access_token.0,
        username: user.username,
        name: user.name,
        id: user.user_id,
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
