//! Error types for credential operations.

use thiserror::Error;

/// Credential operation errors.
///
/// A wrong password is never an error; it is an `Ok(false)` verification
/// result. These variants cover operational failures only.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a valid PHC string.
    ///
    /// Indicates corrupted or mis-provisioned data, not a user mistake.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check whether this error indicates an unusable stored hash.
    #[must_use]
    pub fn is_invalid_hash(&self) -> bool {
        matches!(self, AuthError::InvalidHashFormat)
    }
}
