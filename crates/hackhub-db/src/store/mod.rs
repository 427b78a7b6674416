//! Store traits and implementations.
//!
//! The identity core never touches a connection pool directly; it works
//! against these traits so the backing store is an injected dependency. The
//! Postgres implementation backs production, the in-memory implementation
//! backs tests and local development.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::DbError;
use crate::models::{CreateProject, Project, Session, User};
use async_trait::async_trait;
use hackhub_core::{SessionId, UserId};

/// Persistent user records, one per distinct email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact email. Absence is not an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DbError>;

    /// Atomically find or create the user for `email`.
    ///
    /// `password_hash` is used only when a new row is inserted. Concurrent
    /// calls for the same previously-unseen email must converge on a single
    /// row: the losing insert observes the winner's row instead of erroring.
    async fn find_or_create(&self, email: &str, password_hash: &str) -> Result<User, DbError>;
}

/// Server-side session records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a new session bound to `user_id` and return it.
    async fn create(&self, user_id: UserId) -> Result<Session, DbError>;

    /// Look up a session by token.
    async fn find(&self, id: SessionId) -> Result<Option<Session>, DbError>;

    /// Remove all state for the session. Unknown tokens are a no-op.
    async fn delete(&self, id: SessionId) -> Result<(), DbError>;
}

/// Hackathon project records.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, DbError>;

    /// Look up a project by id.
    async fn get(&self, id: uuid::Uuid) -> Result<Option<Project>, DbError>;

    /// Insert a new project. A duplicate name is `DbError::Conflict`.
    async fn insert(&self, data: CreateProject) -> Result<Project, DbError>;

    /// Replace the project's fields. `None` when the id is unknown; renaming
    /// onto a name held by another project is `DbError::Conflict`.
    async fn update(&self, id: uuid::Uuid, data: CreateProject)
        -> Result<Option<Project>, DbError>;

    /// Delete a project. `false` when the id is unknown.
    async fn delete(&self, id: uuid::Uuid) -> Result<bool, DbError>;
}
