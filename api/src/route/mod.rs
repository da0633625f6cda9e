use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use registry::AppRegistry;
use serde_json::json;

pub mod auth;
pub mod booking;
pub mod event;
pub mod group;
pub mod health;
pub mod user;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(event::build_event_routers())
        .merge(group::build_group_routers())
        .merge(booking::build_booking_routers())
        .merge(auth::routes())
        .fallback(unknown_endpoint)
}

async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
