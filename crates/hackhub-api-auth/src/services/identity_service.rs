//! Identity resolution.
//!
//! Reconciles credential sources onto the single canonical user record for
//! an email address.

use crate::error::ApiAuthError;
use hackhub_auth::{random_secret, PasswordHasher};
use hackhub_db::{User, UserStore};
use std::sync::Arc;

/// Resolves emails to canonical user records.
#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl IdentityService {
    /// Create a new identity service over the given user store.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Resolve the user for a verified external identity assertion.
    ///
    /// An existing user is returned unchanged: assertion claims are never
    /// synced onto the stored record on repeat login. A previously-unseen
    /// email is provisioned atomically with a random placeholder secret, so
    /// every user row carries a password hash while the placeholder can
    /// never be used to log in locally. Concurrent first logins for the same
    /// email converge on one row.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Database` if the store is unavailable.
    pub async fn resolve_by_assertion(&self, email: &str) -> Result<User, ApiAuthError> {
        if let Some(user) = self.users.find_by_email(email).await? {
            tracing::debug!(user_id = %user.id, "Assertion resolved to existing user");
            return Ok(user);
        }

        let placeholder_hash = self
            .hasher
            .hash(&random_secret())
            .map_err(|e| ApiAuthError::Internal(format!("Password hashing failed: {e}")))?;

        let user = self.users.find_or_create(email, &placeholder_hash).await?;
        tracing::info!(user_id = %user.id, "Provisioned user from identity assertion");
        Ok(user)
    }

    /// Plain lookup by email for the local-credential path.
    ///
    /// Absence is not an error; the coordinator turns it into an
    /// authentication failure.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Database` if the store is unavailable.
    pub async fn resolve_by_email(&self, email: &str) -> Result<Option<User>, ApiAuthError> {
        Ok(self.users.find_by_email(email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackhub_db::MemoryStore;

    fn service(store: Arc<MemoryStore>) -> IdentityService {
        IdentityService::new(store, PasswordHasher::with_params(4096, 1, 1).unwrap())
    }

    #[tokio::test]
    async fn assertion_provisions_unseen_email_once() {
        let store = Arc::new(MemoryStore::new());
        let service = service(Arc::clone(&store));

        let first = service.resolve_by_assertion("a@x.com").await.unwrap();
        let second = service.resolve_by_assertion("a@x.com").await.unwrap();

        assert_eq!(first.id, second.id);
        assert!(first.password_hash.is_some());
    }

    #[tokio::test]
    async fn placeholder_hash_is_a_valid_phc_string() {
        let store = Arc::new(MemoryStore::new());
        let service = service(Arc::clone(&store));

        let user = service.resolve_by_assertion("a@x.com").await.unwrap();
        assert!(user.password_hash.unwrap().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn email_is_matched_case_sensitively() {
        let store = Arc::new(MemoryStore::new());
        let service = service(Arc::clone(&store));

        let lower = service.resolve_by_assertion("a@x.com").await.unwrap();
        let upper = service.resolve_by_assertion("A@x.com").await.unwrap();

        // Stored as supplied; distinct case means distinct records.
        assert_ne!(lower.id, upper.id);
    }

    #[tokio::test]
    async fn resolve_by_email_is_a_pure_lookup() {
        let store = Arc::new(MemoryStore::new());
        let service = service(Arc::clone(&store));

        assert!(service.resolve_by_email("a@x.com").await.unwrap().is_none());
        // No user is created as a side effect of the lookup.
        assert!(service.resolve_by_email("a@x.com").await.unwrap().is_none());
    }
}
