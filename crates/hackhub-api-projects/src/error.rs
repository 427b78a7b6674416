//! Projects API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hackhub_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the projects API.
#[derive(Debug, Error)]
pub enum ProjectsError {
    /// No project with the requested id.
    #[error("Project not found")]
    NotFound,

    /// A project with that name already exists.
    #[error("Project with that name already exists")]
    DuplicateName,

    /// Request validation failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The project store failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ProjectsError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ProjectsError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ProjectsError::DuplicateName => (StatusCode::CONFLICT, "duplicate_name"),
            ProjectsError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ProjectsError::Database(e) => {
                tracing::error!(error = %e, "Store failure in projects API");
                if e.is_unavailable() {
                    (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
                }
            }
        };

        let message = match &self {
            ProjectsError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
