use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::BookingId;
use kernel::permission::check_owner;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingResponse, BookingsResponse},
};

pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound(
                "this booking doesn't exist".into(),
            )),
        })
}

pub async fn delete_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("this booking doesn't exist".into()))?;
    check_owner(user.id(), booking.user)?;

    registry
        .relation_maintainer()
        .detach_booking(&booking)
        .await?;
    registry.booking_repository().delete(booking_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
