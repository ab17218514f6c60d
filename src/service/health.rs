//! Liveness and reachability checks.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HomeMessage {
    #[schema(example = "ok")]
    pub message: String,
}

/// Handle `GET /health`.
///
/// Only checks that the process can answer HTTP; it does not look at the
/// collector connection.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthStatus))
)]
pub async fn health() -> Json<HealthStatus> {
    tracing::info!("Health check endpoint called");
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

/// Handle `GET /`.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "No-op home endpoint", body = HomeMessage))
)]
pub async fn home() -> Json<HomeMessage> {
    tracing::info!("Home endpoint called");
    Json(HomeMessage {
        message: "ok".to_string(),
    })
}
