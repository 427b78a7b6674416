//! Logout endpoint.
//!
//! POST /auth/logout - destroy a session.

use crate::error::ApiAuthError;
use crate::models::LogoutRequest;
use crate::router::AuthState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hackhub_core::SessionId;

/// Handle logout.
///
/// Always yields the logged-out end state: an unknown or malformed token is
/// treated as an already-destroyed session, not an error.
#[utoipa::path(
    post,
    path = "/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 204, description = "Logged out"),
    ),
    tag = "Authentication"
)]
pub async fn logout_handler(
    State(state): State<AuthState>,
    Json(request): Json<LogoutRequest>,
) -> Result<StatusCode, ApiAuthError> {
    match request.session_token.parse::<SessionId>() {
        Ok(token) => state.sessions.destroy(token).await?,
        Err(_) => {
            tracing::debug!("Logout with malformed session token");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
