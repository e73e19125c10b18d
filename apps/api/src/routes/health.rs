//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its dependencies:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Kubernetes-style liveness probe
//! - `GET /health/ready` - Readiness check (verifies the database)

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::ApiResult;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Database pool checked by the readiness probe
    pub pool: PgPool,
}

impl HealthState {
    /// Create new health state
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Readiness probe response body
#[derive(Debug, Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe - the process is up and serving requests
async fn liveness_probe() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe - verifies the database connection is usable
async fn readiness_probe(State(state): State<HealthState>) -> ApiResult<impl IntoResponse> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok(Json(ReadinessResponse {
        status: "ready",
        database: "ok",
    }))
}
