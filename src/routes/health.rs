use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::clock;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Always `healthy` while the process is serving requests
    pub status: String,
    pub timestamp: String,
}

/// Health check endpoint
///
/// Returns 200 OK with the current UTC time if the service is running.
/// Suitable for Kubernetes liveness and readiness probes.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: clock::now_iso(),
    })
}
