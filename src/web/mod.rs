//! # Web API
//!
//! axum application serving the process-tracking report and health probes.

use axum::http::StatusCode;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Create the web application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();
    let cors_enabled = state.config.cors_enabled;

    let mut app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::tracking_routes())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    info!(cors_enabled, "Web application created with all routes and middleware");
    app.with_state(state)
}
