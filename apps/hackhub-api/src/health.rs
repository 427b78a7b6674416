//! Health check endpoint.
//!
//! Reports service status, version, and database reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded".
    pub status: String,
    /// Service version from the crate manifest.
    pub version: String,
    /// Whether the database answered a probe query.
    pub database: bool,
    /// Response timestamp (RFC 3339).
    pub timestamp: String,
}

/// Health check handler.
///
/// Returns 200 with `status: "healthy"` when the database is reachable,
/// 503 with `status: "degraded"` otherwise.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_handler(State(pool): State<PgPool>) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .is_ok();

    let (status_code, status) = if database {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!("Health probe failed to reach the database");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
