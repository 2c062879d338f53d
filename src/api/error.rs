use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorResponse;
use crate::services::LogEntryError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    InvalidId,

    ValidationError(String),

    DatabaseError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::InvalidId => write!(f, "Invalid ID"),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidId | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ApiError::NotFound(msg) | ApiError::ValidationError(msg) => msg,
            ApiError::InvalidId => "Invalid ID".to_string(),
            // Storage messages are passed through to the client.
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse::new(error_message))).into_response()
    }
}

impl From<LogEntryError> for ApiError {
    fn from(err: LogEntryError) -> Self {
        match err {
            LogEntryError::Validation(msg) => ApiError::ValidationError(msg),
            LogEntryError::InvalidId(_) => ApiError::InvalidId,
            e @ LogEntryError::NotFound(_) => ApiError::NotFound(e.to_string()),
            LogEntryError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

/// An id segment axum cannot decode (e.g. invalid UTF-8) is still just a bad id.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path identifier");
        ApiError::InvalidId
    }
}
