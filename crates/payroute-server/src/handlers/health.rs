//! Health check endpoint.

use axum::Json;

use crate::types::HealthResponse;

/// `GET /health` — liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
