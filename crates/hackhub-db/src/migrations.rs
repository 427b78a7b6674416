//! Embedded database migrations.

use crate::error::DbError;
use sqlx::PgPool;

/// Run all pending migrations against the given pool.
///
/// # Errors
///
/// Returns `DbError::MigrationFailed` if any migration cannot be applied.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(DbError::MigrationFailed)?;

    tracing::info!("Database migrations applied");
    Ok(())
}
