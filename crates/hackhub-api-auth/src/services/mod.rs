//! Authentication services.

mod auth_service;
mod credential;
mod identity_service;
mod session_service;

pub use auth_service::AuthService;
pub use credential::CredentialVerifier;
pub use identity_service::IdentityService;
pub use session_service::SessionService;
