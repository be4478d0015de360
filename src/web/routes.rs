//! Web API Routes

use axum::{routing::get, Router};

use crate::constants::TRACKING_ROUTE;
use crate::web::{handlers, state::AppState};

/// Health check routes for monitoring probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/ready", get(handlers::health::readiness_probe))
}

/// Read-only process tracking report
pub fn tracking_routes() -> Router<AppState> {
    Router::new().route(
        TRACKING_ROUTE,
        get(handlers::tracking::pcb_process_tracking),
    )
}
