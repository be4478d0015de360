//! # Structured Logging Module
//!
//! Console logging through `tracing-subscriber`, human-readable or JSON lines
//! depending on configuration. `RUST_LOG` overrides the configured level.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(&config.level);

        let console_layer = if config.json {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // A subscriber may already be installed by an embedding process or a test harness
        if tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            pid = std::process::id(),
            json = config.json,
            "Structured logging initialized"
        );
    });
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log the outcome of one process-tracking report
pub fn log_report_operation(
    unit_count: usize,
    catalog_size: usize,
    unresolved_units: usize,
    duration_ms: u64,
) {
    tracing::info!(
        operation = "pcb_process_tracking",
        unit_count = unit_count,
        catalog_size = catalog_size,
        unresolved_units = unresolved_units,
        duration_ms = duration_ms,
        "REPORT_OPERATION"
    );
}

/// Log a data-access failure with context
pub fn log_error(component: &str, operation: &str, error: &str) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        "ERROR"
    );
}
