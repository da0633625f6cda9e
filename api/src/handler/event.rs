use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::EventId;
use kernel::permission::check_owner;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::event::{
        CreateEventRequest, EventResponse, EventsResponse, UpdateEventRequest,
        UpdateEventRequestWithIds,
    },
};

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateEventRequest>,
) -> AppResult<Json<EventResponse>> {
    req.validate(&())?;

    let event = registry
        .event_repository()
        .create(req.into(), user.id())
        .await?;
    let maintainer = registry.relation_maintainer();
    maintainer
        .attach_event_to_groups(event.event_id, &event.groups)
        .await?;
    maintainer
        .attach_event_to_organizer(event.event_id, user.id())
        .await?;

    Ok(Json(event.into()))
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn show_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .event_repository()
        .find_by_id(event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound("this event doesn't exist".into())),
        })
}

pub async fn update_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateEventRequest>,
) -> AppResult<Json<EventResponse>> {
    req.validate(&())?;

    let mut event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this event doesn't exist".into()))?;
    check_owner(user.id(), event.organizer)?;

    let update: kernel::model::event::event::UpdateEvent =
        UpdateEventRequestWithIds::new(event_id, user.id(), req).into();
    let new_groups = update.groups.clone();
    event.apply_update(update);
    if let Some(groups) = new_groups {
        if !groups.is_empty() {
            registry
                .relation_maintainer()
                .reconcile_event_groups(&mut event, groups)
                .await?;
        }
    }
    registry.event_repository().save(&event).await?;

    Ok(Json(event.into()))
}

pub async fn delete_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this event doesn't exist".into()))?;
    check_owner(user.id(), event.organizer)?;

    registry.relation_maintainer().detach_event(&event).await?;
    registry.event_repository().delete(event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn book_event(
    user: AuthorizedUser,
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventResponse>> {
    registry
        .relation_maintainer()
        .book_event(user.id(), event_id)
        .await
        .map(EventResponse::from)
        .map(Json)
}
