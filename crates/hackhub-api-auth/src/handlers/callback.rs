//! Identity-provider callback endpoint.
//!
//! POST /auth/callback - log in with a parsed provider assertion. The
//! transport ahead of this handler has already verified the provider
//! exchange; the core trusts the assertion as-is.

use crate::error::ApiAuthError;
use crate::models::{
    validate_request, AssertionCallbackRequest, LoginAttempt, LoginResponse, ProviderAssertion,
};
use crate::router::AuthState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

/// Handle an identity-provider assertion login.
///
/// A previously-unseen email is provisioned on the spot, so this path always
/// yields a session unless a store fails.
#[utoipa::path(
    post,
    path = "/auth/callback",
    request_body = AssertionCallbackRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed assertion"),
    ),
    tag = "Authentication"
)]
pub async fn callback_handler(
    State(state): State<AuthState>,
    Json(request): Json<AssertionCallbackRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiAuthError> {
    validate_request(&request)?;

    let session = state
        .auth
        .authenticate(LoginAttempt::Assertion(ProviderAssertion {
            provider: request.provider,
            email: request.email,
            name: request.name,
        }))
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
