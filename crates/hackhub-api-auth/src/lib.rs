//! Authentication and identity reconciliation for hackhub.
//!
//! Given either an external identity-provider assertion or a local
//! email/password pair, this crate produces exactly one authenticated
//! session bound to exactly one canonical user record, idempotently across
//! repeated logins:
//!
//! - [`CredentialVerifier`] checks a plaintext secret against a stored hash.
//! - [`IdentityService`] resolves an email to the single canonical user,
//!   provisioning previously-unseen assertion emails atomically.
//! - [`SessionService`] establishes and destroys server-side sessions.
//! - [`AuthService`] coordinates a tagged [`models::LoginAttempt`] through
//!   the three and maps every outcome to a typed result.
//!
//! # Example
//!
//! ```rust,ignore
//! use hackhub_api_auth::{auth_router, AuthState};
//! use hackhub_auth::PasswordHasher;
//!
//! let state = AuthState::new(users, sessions, PasswordHasher::new(), "/projects");
//! let app = auth_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ApiAuthError, ErrorResponse};
pub use models::{
    AssertionCallbackRequest, LoginAttempt, LoginRequest, LoginResponse, LogoutRequest,
    MeResponse, ProviderAssertion,
};
pub use router::{auth_router, AuthState};
pub use services::{AuthService, CredentialVerifier, IdentityService, SessionService};
