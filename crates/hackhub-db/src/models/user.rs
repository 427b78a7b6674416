//! User entity model.

use chrono::{DateTime, Utc};
use hackhub_core::UserId;
use sqlx::FromRow;

/// The canonical identity record for one email address.
///
/// Invariant: at most one row per email, enforced by the unique constraint
/// on `users.email` together with the conflict-tolerant find-or-create in
/// the user store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// Email address, unique and stored exactly as supplied.
    pub email: String,

    /// Argon2id password hash (PHC format).
    ///
    /// Every row written by this system carries a hash: accounts provisioned
    /// from an external assertion get a random placeholder hash that can
    /// never verify. `None` indicates a provisioning defect, not a normal
    /// state.
    pub password_hash: Option<String>,

    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The user id as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }
}
