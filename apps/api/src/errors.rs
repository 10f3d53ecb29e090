use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assistant::AssistantError;
use crate::roadmap::RoadmapError;
use crate::storage::StorageError;

pub const ROADMAP_FAILURE_MESSAGE: &str = "Failed to generate roadmap. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Login required")]
    LoginRequired,

    #[error("Session is still loading")]
    SessionLoading,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Roadmap error: {0}")]
    Roadmap(#[from] RoadmapError),

    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::LoginRequired => (
                StatusCode::UNAUTHORIZED,
                "LOGIN_REQUIRED",
                "Please log in to continue".to_string(),
            ),
            AppError::SessionLoading => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SESSION_LOADING",
                "Session is still loading".to_string(),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Roadmap(e) => {
                tracing::error!("Roadmap generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ROADMAP_ERROR",
                    ROADMAP_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Assistant(e) => {
                tracing::error!("Assistant error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ASSISTANT_ERROR",
                    e.user_message().to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
