//! Current-user endpoint.
//!
//! GET /auth/me - resolve the presented session token to its user.

use crate::error::ApiAuthError;
use crate::models::MeResponse;
use crate::router::AuthState;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use hackhub_core::SessionId;

/// Handle a current-user lookup.
///
/// The session token travels as a bearer credential. Destroyed or unknown
/// tokens behave as "not authenticated".
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Authenticated user", body = MeResponse),
        (status = 401, description = "Missing, unknown, or destroyed session token"),
    ),
    security(("session_token" = [])),
    tag = "Authentication"
)]
pub async fn me_handler(
    State(state): State<AuthState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, ApiAuthError> {
    let token = bearer_token(&headers).ok_or(ApiAuthError::NotAuthenticated)?;

    let user = state
        .sessions
        .current_user(token)
        .await?
        .ok_or(ApiAuthError::NotAuthenticated)?;

    Ok(Json(MeResponse {
        user_id: user.user_id(),
        email: user.email,
        created_at: user.created_at,
    }))
}

/// Extract a session token from the Authorization header.
///
/// A malformed token is treated the same as a missing one.
fn bearer_token(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_parses_uuid() {
        let token = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(bearer_token(&headers), Some(token));
    }

    #[test]
    fn missing_or_malformed_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer nonsense"));
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
