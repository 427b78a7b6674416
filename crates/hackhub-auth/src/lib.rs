//! Password hashing and secret generation for hackhub.
//!
//! Provides Argon2id hashing with OWASP-recommended parameters, verification
//! where a mismatched password is a normal `false` result, and random opaque
//! secrets for accounts provisioned from an external identity assertion.

mod error;
mod password;
mod secret;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use secret::random_secret;
