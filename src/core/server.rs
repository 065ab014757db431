//! HTTP routes served next to the rendered page.

use axum::{Json, Router, routing::get};
use serde::Serialize;

/// Liveness path probed by the hosting infrastructure
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness probe
pub async fn health() -> Json<HealthStatus> {
    tracing::debug!("Health check");
    Json(HealthStatus { status: "ok" })
}

/// Router with the non-page endpoints.
pub fn health_router() -> Router {
    Router::new().route(HEALTH_PATH, get(health))
}
