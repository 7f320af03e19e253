//! # Health Check Handlers
//!
//! Liveness endpoint for monitoring and load balancing.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::state::AppState;

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    uptime_seconds: u64,
}

/// Basic health check endpoint: GET /health
///
/// Returns OK whenever the service is running; the engine has no
/// background machinery that could degrade independently.
pub async fn basic_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
    })
}
