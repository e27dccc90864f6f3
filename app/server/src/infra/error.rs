use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::validation::{FieldError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Message returned whenever an article id has no matching row
pub const ARTICLE_NOT_FOUND: &str = "Artículo no encontrado";

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Malformed, missing or mistyped request input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body: `{"detail": ...}`
#[derive(Debug, Serialize)]
struct ErrorResponse<T: Serialize> {
    detail: T,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { detail: msg })).into_response()
            }
            AppError::Validation(e) => {
                tracing::debug!("Rejected request: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse { detail: e.errors }),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal_server_error()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: "Internal Server Error",
        }),
    )
        .into_response()
}

/// Convenience type alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a NotFound error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// NotFound error for a missing article
    pub fn article_not_found() -> Self {
        Self::not_found(ARTICLE_NOT_FOUND)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_unreadable",
        };
        ValidationError::single(FieldError::new(["body"], rejection.body_text(), kind)).into()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => ValidationError::single(
                FieldError::new(["path", "id"], e.body_text(), "int_parsing"),
            )
            .into(),
            other => AppError::internal(other.body_text()),
        }
    }
}
