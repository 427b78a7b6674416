//! Request models for the authentication endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Local-credential login request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// User's plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Parsed identity-provider callback.
///
/// The transport layer extracts this from the provider's wire format; by the
/// time it reaches the core the assertion is already verified.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssertionCallbackRequest {
    /// Provider that asserted the identity (e.g. "github").
    #[validate(length(min = 1, message = "Provider is required"))]
    pub provider: String,

    /// Email carried in the assertion.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Display name claim, if present.
    pub name: Option<String>,
}

/// Logout request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogoutRequest {
    /// The session token to destroy. An unknown or malformed token still
    /// yields the logged-out end state.
    pub session_token: String,
}
