use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequestBody(String),
    #[error("{0}")]
    MalformedId(String),
    #[error("expected `{0}` to be unique")]
    UniqueViolation(String),
    #[error("token missing or invalid")]
    UnauthenticatedError,
    #[error("you don't have permission to perform this action")]
    ForbiddenOperation,
    #[error("you don't have permission to perform this action")]
    NotMember,
    #[error("you have already booked this event")]
    AlreadyBooked,
    #[error("You already belong to this group.")]
    AlreadyMember,
    #[error(transparent)]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidRequestBody(_)
            | AppError::MalformedId(_)
            | AppError::UniqueViolation(_)
            | AppError::AlreadyBooked
            | AppError::AlreadyMember => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError
            | AppError::ForbiddenOperation
            | AppError::NotMember => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.message = %self,
                "unexpected error happened"
            );
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
