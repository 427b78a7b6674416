//! Session model.

use chrono::{DateTime, Utc};
use hackhub_core::{SessionId, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// An established authenticated session.
///
/// The row id doubles as the opaque session token handed to the client. A
/// session binds exactly one user and carries no other claims. Destroying a
/// session removes the whole row; multiple live sessions per user are
/// allowed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    /// Session token.
    pub id: uuid::Uuid,

    /// The user this session authenticates.
    pub user_id: uuid::Uuid,

    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// The session token as a typed `SessionId`.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        SessionId::from_uuid(self.id)
    }

    /// The bound user as a typed `UserId`.
    #[must_use]
    pub fn bound_user(&self) -> UserId {
        UserId::from_uuid(self.user_id)
    }
}
