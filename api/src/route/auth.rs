use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, logout};

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}
