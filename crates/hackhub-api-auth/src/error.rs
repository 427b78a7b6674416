//! Authentication API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hackhub_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the authentication core.
///
/// Every failure crosses the coordinator boundary as a typed value; nothing
/// here is ever raised as a panic.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    /// Local email not found, or secret mismatch.
    ///
    /// Externally a single generic message for both halves, so callers
    /// cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The resolved user has no usable password hash.
    ///
    /// A provisioning defect, not a user mistake. Externally identical to
    /// `InvalidCredentials`; logged distinctly for operators at the point of
    /// detection.
    #[error("Credential verification impossible")]
    VerificationImpossible,

    /// A request was presented without a valid session.
    #[error("Authentication required")]
    NotAuthenticated,

    /// Request validation failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The identity or session store failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiAuthError {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            // Both credential failures share one external code.
            ApiAuthError::InvalidCredentials | ApiAuthError::VerificationImpossible => {
                "invalid_credentials"
            }
            ApiAuthError::NotAuthenticated => "not_authenticated",
            ApiAuthError::Validation(_) => "validation_error",
            ApiAuthError::Database(e) if e.is_unavailable() => "service_unavailable",
            ApiAuthError::Database(_) | ApiAuthError::Internal(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiAuthError::InvalidCredentials
            | ApiAuthError::VerificationImpossible
            | ApiAuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiAuthError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiAuthError::Database(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiAuthError::Database(_) | ApiAuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            // One generic message for every credential failure; never reveal
            // which half was wrong.
            ApiAuthError::InvalidCredentials | ApiAuthError::VerificationImpossible => {
                "Invalid email or password".to_string()
            }
            ApiAuthError::NotAuthenticated => "Authentication required".to_string(),
            ApiAuthError::Validation(msg) => msg.clone(),
            ApiAuthError::Database(e) if e.is_unavailable() => {
                "Service temporarily unavailable".to_string()
            }
            ApiAuthError::Database(_) | ApiAuthError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        match &self {
            ApiAuthError::Database(e) => {
                tracing::error!(error = %e, "Store failure during authentication");
            }
            ApiAuthError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal authentication failure");
            }
            _ => {}
        }

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}
