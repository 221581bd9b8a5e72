use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::HistoryError;

/// Every error reaches the client as `{"error": "<message>"}`; internal
/// causes are logged and replaced by the endpoint's fixed message.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(String),

    InternalError {
        message: &'static str,
        cause: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError { message, cause } => write!(f, "{}: {}", message, cause),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError { message, cause } => {
                tracing::error!(cause = %cause, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorBody::new(error_message))).into_response()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn internal(message: &'static str, cause: impl fmt::Display) -> Self {
        ApiError::InternalError {
            message,
            cause: cause.to_string(),
        }
    }

    pub fn invalid_user_id(id: impl fmt::Display) -> Self {
        ApiError::validation(format!(
            "Invalid user ID: {}. ID must be a positive integer",
            id
        ))
    }

    pub fn route_not_found(path: &str) -> Self {
        ApiError::NotFound(format!("No route for {}", path))
    }

    pub fn history(err: HistoryError) -> Self {
        match err {
            HistoryError::InvalidUser(id) => ApiError::invalid_user_id(id),
            HistoryError::Database(cause) => {
                ApiError::internal(super::messages::HISTORY_FAILED, cause)
            }
        }
    }
}
