//! Local-credential login endpoint.
//!
//! POST /auth/login - authenticate with email and password.

use crate::error::ApiAuthError;
use crate::models::{validate_request, LoginAttempt, LoginRequest, LoginResponse};
use crate::router::AuthState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// Handle a local email/password login.
///
/// An unknown email and a wrong password produce the same response.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiAuthError> {
    validate_request(&request)?;

    let session = state
        .auth
        .authenticate(LoginAttempt::Local {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            session_token: session.session_id(),
            user_id: session.bound_user(),
            redirect_to: state.post_login_redirect.clone(),
        }),
    ))
}
