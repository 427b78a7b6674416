//! Error types for the hackhub-db crate.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    ///
    /// The store is unavailable; the current attempt fails and the caller
    /// may retry at the transport layer.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[source] sqlx::migrate::MigrateError),

    /// A query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// A uniqueness constraint was violated.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DbError {
    /// Check if this error indicates the store could not be reached.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }

    /// Check if this error is a uniqueness conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::Conflict(_))
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Tls(_) => DbError::ConnectionFailed(err),
            _ => DbError::QueryFailed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(err.is_unavailable());
    }

    #[test]
    fn row_not_found_is_query_failure() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(!err.is_unavailable());
        assert!(matches!(err, DbError::QueryFailed(_)));
    }

    #[test]
    fn conflict_predicate() {
        assert!(DbError::Conflict("projects.name".into()).is_conflict());
        assert!(!DbError::from(sqlx::Error::RowNotFound).is_conflict());
    }
}
