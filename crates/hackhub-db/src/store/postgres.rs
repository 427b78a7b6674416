//! Postgres-backed stores.

use crate::error::DbError;
use crate::models::{CreateProject, Project, Session, User};
use crate::store::{ProjectStore, SessionStore, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use hackhub_core::{SessionId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

/// Store implementation over a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DbError> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_or_create(&self, email: &str, password_hash: &str) -> Result<User, DbError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row when the
        // unique constraint fires, so a losing concurrent insert observes the
        // winner instead of erroring.
        let user: User = sqlx::query_as(
            r"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn create(&self, user_id: UserId) -> Result<Session, DbError> {
        let session: Session = sqlx::query_as(
            r"
            INSERT INTO sessions (id, user_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_uuid())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    async fn find(&self, id: SessionId) -> Result<Option<Session>, DbError> {
        let session: Option<Session> = sqlx::query_as("SELECT * FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(session)
    }

    async fn delete(&self, id: SessionId) -> Result<(), DbError> {
        // Deleting an unknown session still yields the logged-out end state.
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn list(&self) -> Result<Vec<Project>, DbError> {
        let projects: Vec<Project> =
            sqlx::query_as("SELECT * FROM projects ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(projects)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Project>, DbError> {
        let project: Option<Project> = sqlx::query_as("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn insert(&self, data: CreateProject) -> Result<Project, DbError> {
        let now = Utc::now();
        let result: Result<Project, sqlx::Error> = sqlx::query_as(
            r"
            INSERT INTO projects (
                id, name, tag_line, description, tags, members, photo,
                application_area, winner, winner_type, hackathon, year,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.tag_line)
        .bind(&data.description)
        .bind(&data.tags)
        .bind(&data.members)
        .bind(&data.photo)
        .bind(&data.application_area)
        .bind(data.winner)
        .bind(&data.winner_type)
        .bind(&data.hackathon)
        .bind(data.year)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(project) => Ok(project),
            Err(e) if is_unique_violation(&e) => {
                Err(DbError::Conflict(format!("project name '{}'", data.name)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        id: Uuid,
        data: CreateProject,
    ) -> Result<Option<Project>, DbError> {
        let result: Result<Option<Project>, sqlx::Error> = sqlx::query_as(
            r"
            UPDATE projects
            SET name = $2, tag_line = $3, description = $4, tags = $5,
                members = $6, photo = $7, application_area = $8, winner = $9,
                winner_type = $10, hackathon = $11, year = $12, updated_at = $13
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.tag_line)
        .bind(&data.description)
        .bind(&data.tags)
        .bind(&data.members)
        .bind(&data.photo)
        .bind(&data.application_area)
        .bind(data.winner)
        .bind(&data.winner_type)
        .bind(&data.hackathon)
        .bind(data.year)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(project) => Ok(project),
            Err(e) if is_unique_violation(&e) => {
                Err(DbError::Conflict(format!("project name '{}'", data.name)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}
