//! Authentication coordinator.
//!
//! Entry point for login attempts. Dispatches to the assertion or local
//! path, drives identity resolution and session establishment, and maps
//! every outcome to a typed result. The two paths share no intermediate
//! state and converge only at session establishment; there is no partially
//! authenticated outcome.

use crate::error::ApiAuthError;
use crate::models::LoginAttempt;
use crate::services::credential::CredentialVerifier;
use crate::services::identity_service::IdentityService;
use crate::services::session_service::SessionService;
use hackhub_auth::PasswordHasher;
use hackhub_db::{Session, SessionStore, UserStore};
use std::sync::Arc;

/// Coordinates login attempts into established sessions.
#[derive(Clone)]
pub struct AuthService {
    identity: IdentityService,
    verifier: CredentialVerifier,
    sessions: SessionService,
}

impl AuthService {
    /// Create a coordinator over the given stores and hasher configuration.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            identity: IdentityService::new(Arc::clone(&users), hasher.clone()),
            verifier: CredentialVerifier::new(hasher),
            sessions: SessionService::new(sessions, users),
        }
    }

    /// The session manager, for logout and token resolution.
    #[must_use]
    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    /// Authenticate a login attempt, producing an established session.
    ///
    /// Assertion path: the resolver always yields a user (find-or-create),
    /// so the attempt succeeds unless a store fails. Local path: an unknown
    /// email and a mismatched secret both surface as `InvalidCredentials`;
    /// the two are distinguished only in internal logging.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::InvalidCredentials` on any local-credential failure.
    /// - `ApiAuthError::VerificationImpossible` if the resolved user has no
    ///   usable hash (externally identical to `InvalidCredentials`).
    /// - `ApiAuthError::Database` if a store is unavailable.
    pub async fn authenticate(&self, attempt: LoginAttempt) -> Result<Session, ApiAuthError> {
        match attempt {
            LoginAttempt::Assertion(assertion) => {
                let user = self.identity.resolve_by_assertion(&assertion.email).await?;
                let session = self.sessions.establish(&user).await?;
                tracing::info!(
                    user_id = %user.id,
                    provider = %assertion.provider,
                    "User authenticated via identity assertion"
                );
                Ok(session)
            }
            LoginAttempt::Local { email, password } => {
                let Some(user) = self.identity.resolve_by_email(&email).await? else {
                    // Generic error to prevent account enumeration.
                    tracing::debug!("Login attempt for unknown email");
                    return Err(ApiAuthError::InvalidCredentials);
                };

                if !self.verifier.verify(&user, &password)? {
                    tracing::debug!(user_id = %user.id, "Invalid password attempt");
                    return Err(ApiAuthError::InvalidCredentials);
                }

                let session = self.sessions.establish(&user).await?;
                tracing::info!(user_id = %user.id, "User authenticated with local credentials");
                Ok(session)
            }
        }
    }
}
