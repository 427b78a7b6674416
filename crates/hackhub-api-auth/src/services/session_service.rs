//! Session management.

use crate::error::ApiAuthError;
use hackhub_core::SessionId;
use hackhub_db::{Session, SessionStore, User, UserStore};
use std::sync::Arc;

/// Establishes and destroys server-side sessions.
///
/// Session lifecycle is a value threaded by the caller; nothing here mutates
/// hidden per-request state.
#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
}

impl SessionService {
    /// Create a new session service over the given stores.
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionStore>, users: Arc<dyn UserStore>) -> Self {
        Self { sessions, users }
    }

    /// Establish a new session bound to the given user.
    ///
    /// Prior sessions for the same user stay valid; there is no
    /// single-session-per-user constraint.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Database` if the session store is unavailable.
    pub async fn establish(&self, user: &User) -> Result<Session, ApiAuthError> {
        let session = self.sessions.create(user.user_id()).await?;
        tracing::info!(
            user_id = %session.user_id,
            session_id = %session.id,
            "Session established"
        );
        Ok(session)
    }

    /// Destroy a session, clearing all of its state.
    ///
    /// Destroying an unknown or already-destroyed session is not an error;
    /// the end state is "logged out" either way.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Database` if the session store is unavailable.
    pub async fn destroy(&self, token: SessionId) -> Result<(), ApiAuthError> {
        self.sessions.delete(token).await?;
        tracing::info!(session_id = %token, "Session destroyed");
        Ok(())
    }

    /// Resolve a presented token to its bound user.
    ///
    /// Unknown or destroyed tokens resolve to `None`; the transport layer
    /// maps that to "not authenticated".
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Database` if a store is unavailable.
    pub async fn current_user(&self, token: SessionId) -> Result<Option<User>, ApiAuthError> {
        let Some(session) = self.sessions.find(token).await? else {
            return Ok(None);
        };

        Ok(self.users.find_by_id(session.bound_user()).await?)
    }
}
