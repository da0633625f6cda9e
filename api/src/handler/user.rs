use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AppJson,
    model::user::{
        CreateUserRequest, UpdateUserRequest, UpdateUserRequestWithId, UserResponse, UsersResponse,
    },
};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    let groups = req.groups.clone();
    let user = registry.user_repository().create(req.into()).await?;
    let user = if groups.is_empty() {
        user
    } else {
        registry
            .relation_maintainer()
            .attach_user_to_groups(user, &groups)
            .await?
    };

    Ok(Json(user.into()))
}

pub async fn show_user_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn show_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound("this user doesn't exist".into())),
        })
}

pub async fn update_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    let mut user = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this user doesn't exist".into()))?;
    user.apply_update(UpdateUserRequestWithId::new(user_id, req).into());
    registry.user_repository().save(&user).await?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    // Deleting an already absent user still answers 204.
    if let Some(user) = registry.user_repository().find_by_id(user_id).await? {
        registry.relation_maintainer().detach_user(&user).await?;
        registry.user_repository().delete(user_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
