use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::GroupId;
use kernel::permission::check_owner;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::{
        group::{
            CreateGroupRequest, GroupResponse, GroupsResponse, UpdateGroupRequest,
            UpdateGroupRequestWithIds,
        },
        user::UserResponse,
    },
};

pub async fn register_group(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateGroupRequest>,
) -> AppResult<Json<GroupResponse>> {
    req.validate(&())?;

    let group = registry
        .group_repository()
        .create(req.into(), user.id())
        .await?;
    registry
        .relation_maintainer()
        .attach_group_to_creator(group.group_id, user.id())
        .await?;

    Ok(Json(group.into()))
}

pub async fn show_group_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GroupsResponse>> {
    registry
        .group_repository()
        .find_all()
        .await
        .map(GroupsResponse::from)
        .map(Json)
}

pub async fn show_group(
    Path(group_id): Path<GroupId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GroupResponse>> {
    registry
        .group_repository()
        .find_by_id(group_id)
        .await
        .and_then(|group| match group {
            Some(group) => Ok(Json(group.into())),
            None => Err(AppError::EntityNotFound("this group doesn't exist".into())),
        })
}

pub async fn update_group(
    user: AuthorizedUser,
    Path(group_id): Path<GroupId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateGroupRequest>,
) -> AppResult<Json<GroupResponse>> {
    req.validate(&())?;

    let mut group = registry
        .group_repository()
        .find_by_id(group_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this group doesn't exist".into()))?;
    check_owner(user.id(), group.creator)?;

    group.apply_update(UpdateGroupRequestWithIds::new(group_id, user.id(), req).into());
    registry.group_repository().save(&group).await?;

    Ok(Json(group.into()))
}

pub async fn delete_group(
    user: AuthorizedUser,
    Path(group_id): Path<GroupId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let group = registry
        .group_repository()
        .find_by_id(group_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this group doesn't exist".into()))?;
    check_owner(user.id(), group.creator)?;

    registry.relation_maintainer().detach_group(&group).await?;
    registry.group_repository().delete(group_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn join_group(
    user: AuthorizedUser,
    Path(group_id): Path<GroupId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .relation_maintainer()
        .join_group(user.id(), group_id)
        .await
        .map(UserResponse::from)
        .map(Json)
}

pub async fn leave_group(
    user: AuthorizedUser,
    Path(group_id): Path<GroupId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .relation_maintainer()
        .leave_group(user.id(), group_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
