use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<String>,
    },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: None,
        }
    }
}

/// Wire shape of every error response: `{ "error": ..., "details"?: ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), None),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            AppError::Upstream(msg) => {
                tracing::error!("Error generating headlines: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate headlines".to_string(),
                    Some(msg),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
