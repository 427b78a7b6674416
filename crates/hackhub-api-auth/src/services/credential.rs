//! Credential verification against stored hashes.

use crate::error::ApiAuthError;
use hackhub_auth::{AuthError, PasswordHasher};
use hackhub_db::User;

/// Checks a supplied plaintext secret against a user's stored hash.
///
/// Pure computation over its inputs; no side effects beyond logging.
#[derive(Clone)]
pub struct CredentialVerifier {
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    /// Create a verifier around the given hasher configuration.
    #[must_use]
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }

    /// Verify a plaintext secret against the user's stored hash.
    ///
    /// A mismatched secret is a normal `Ok(false)` result, never an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::VerificationImpossible` if the user has no
    /// usable password hash. That is a provisioning defect, logged distinctly
    /// for operators; the caller maps it to the same user-visible outcome as
    /// a credential mismatch.
    pub fn verify(&self, user: &User, secret: &str) -> Result<bool, ApiAuthError> {
        let Some(hash) = user.password_hash.as_deref() else {
            tracing::error!(
                user_id = %user.id,
                "User record has no password hash; verification impossible"
            );
            return Err(ApiAuthError::VerificationImpossible);
        };

        match self.hasher.verify(secret, hash) {
            Ok(matches) => Ok(matches),
            Err(AuthError::InvalidHashFormat) => {
                tracing::error!(
                    user_id = %user.id,
                    "Stored password hash is unusable; verification impossible"
                );
                Err(ApiAuthError::VerificationImpossible)
            }
            Err(e) => Err(ApiAuthError::Internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(4096, 1, 1).unwrap()
    }

    fn user_with_hash(hash: Option<String>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            password_hash: hash,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn correct_secret_verifies() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret").unwrap();
        let verifier = CredentialVerifier::new(hasher);

        let user = user_with_hash(Some(hash));
        assert!(verifier.verify(&user, "secret").unwrap());
    }

    #[test]
    fn wrong_secret_is_false_not_error() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret").unwrap();
        let verifier = CredentialVerifier::new(hasher);

        let user = user_with_hash(Some(hash));
        assert!(!verifier.verify(&user, "wrong").unwrap());
    }

    #[test]
    fn missing_hash_is_verification_impossible() {
        let verifier = CredentialVerifier::new(fast_hasher());
        let user = user_with_hash(None);

        let err = verifier.verify(&user, "anything").unwrap_err();
        assert!(matches!(err, ApiAuthError::VerificationImpossible));
    }

    #[test]
    fn corrupt_hash_is_verification_impossible() {
        let verifier = CredentialVerifier::new(fast_hasher());
        let user = user_with_hash(Some("garbage".into()));

        let err = verifier.verify(&user, "anything").unwrap_err();
        assert!(matches!(err, ApiAuthError::VerificationImpossible));
    }
}
