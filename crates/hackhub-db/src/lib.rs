//! Database layer for hackhub.
//!
//! Provides the entity models, the store traits the identity core depends
//! on, a Postgres implementation, an in-memory implementation for tests and
//! local development, and embedded migrations.

mod error;
mod migrations;
pub mod models;
pub mod store;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{CreateProject, Project, Session, User};
pub use store::{MemoryStore, PgStore, ProjectStore, SessionStore, UserStore};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Connect to Postgres with bounded acquire behavior.
///
/// Store operations must surface unavailability as a failure rather than
/// hang, so the pool uses a finite acquire timeout.
///
/// # Errors
///
/// Returns `DbError::ConnectionFailed` if the database cannot be reached.
pub async fn connect(database_url: &str) -> Result<PgPool, DbError> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(DbError::ConnectionFailed)
}
