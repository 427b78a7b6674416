//! Response models for the authentication endpoints.

use chrono::{DateTime, Utc};
use hackhub_core::{SessionId, UserId};
use serde::Serialize;
use utoipa::ToSchema;

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque token identifying the established session.
    #[schema(value_type = String, format = Uuid)]
    pub session_token: SessionId,

    /// The authenticated user.
    #[schema(value_type = String, format = Uuid)]
    pub user_id: UserId,

    /// Canonical post-login landing path, supplied by the transport layer.
    pub redirect_to: String,
}

/// Current-user response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    /// The authenticated user.
    #[schema(value_type = String, format = Uuid)]
    pub user_id: UserId,

    /// The user's email address.
    pub email: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
