//! Authentication router configuration.
//!
//! Routes:
//! - POST /auth/login
//! - POST /auth/callback
//! - POST /auth/logout
//! - GET  /auth/me

use crate::handlers::{callback_handler, login_handler, logout_handler, me_handler};
use crate::services::{AuthService, SessionService};
use axum::routing::{get, post};
use axum::Router;
use hackhub_auth::PasswordHasher;
use hackhub_db::{SessionStore, UserStore};
use std::sync::Arc;

/// Shared state for the authentication endpoints.
#[derive(Clone)]
pub struct AuthState {
    /// The authentication coordinator.
    pub auth: Arc<AuthService>,
    /// The session manager, shared with the coordinator.
    pub sessions: Arc<SessionService>,
    /// Canonical post-login landing path handed back to clients.
    pub post_login_redirect: String,
}

impl AuthState {
    /// Assemble the authentication services over the given stores.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: PasswordHasher,
        post_login_redirect: impl Into<String>,
    ) -> Self {
        let auth = AuthService::new(users, sessions, hasher);
        let session_service = auth.sessions().clone();
        Self {
            auth: Arc::new(auth),
            sessions: Arc::new(session_service),
            post_login_redirect: post_login_redirect.into(),
        }
    }
}

/// Build the authentication router.
pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/callback", post(callback_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler))
        .with_state(state)
}
