//! # Health Check Handlers
//!
//! Liveness and readiness endpoints for monitoring and load balancing.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Basic health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness response including the backing store check
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: String,
    pub backend: String,
    pub duration_ms: u64,
}

/// Basic health check endpoint: GET /health
///
/// Returns OK whenever the process is serving requests.
pub async fn basic_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Readiness probe: GET /ready
///
/// Ready only when the backing store answers.
pub async fn readiness_probe(State(state): State<AppState>) -> ApiResult<Json<ReadinessResponse>> {
    debug!("Performing readiness probe");

    let start_time = std::time::Instant::now();
    let repository = state.repository();

    if let Err(e) = repository.health_check().await {
        error!(backend = repository.backend_name(), error = %e, "Readiness check failed");
        return Err(ApiError::ServiceUnavailable);
    }

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        backend: repository.backend_name().to_string(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    }))
}
