//! # PCB Tracker Server
//!
//! Loads configuration, opens the database pool and serves the
//! process-tracking API until interrupted.

use std::sync::Arc;

use anyhow::Context;
use pcb_tracker::config::ConfigManager;
use pcb_tracker::database::connect_lazy;
use pcb_tracker::logging::init_structured_logging;
use pcb_tracker::repository::PgTrackingRepository;
use pcb_tracker::web::{create_app, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let manager = ConfigManager::load().context("failed to load configuration")?;
    let config = manager.config();

    init_structured_logging(&config.logging);
    info!(environment = manager.environment(), "Starting PCB process tracker");

    let pool = connect_lazy(&config.database).context("failed to configure database pool")?;
    let repository = Arc::new(PgTrackingRepository::new(pool.clone()));

    let app = create_app(AppState::new(config.web.clone(), repository));

    let listener = tokio::net::TcpListener::bind(&config.web.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.web.bind_address))?;
    info!(address = %config.web.bind_address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
