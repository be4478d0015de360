//! # Tracker Configuration
//!
//! Typed configuration for the process-tracking service. Values are layered by
//! [`ConfigManager`]: built-in defaults, `config/tracker.toml`,
//! `config/tracker.<environment>.toml`, then `PCB_TRACKER__*` environment
//! variables and finally `DATABASE_URL`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pcb_tracker::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//!
//! let bind_address = &manager.config().web.bind_address;
//! let pool_size = manager.config().database.max_connections;
//! # Ok(())
//! # }
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, TrackerError};

pub use loader::ConfigManager;

/// Root configuration for the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub database: DatabaseConfig,
    pub web: WebConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the manufacturing database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/pcb_tracker_development".to_string(),
            max_connections: 10,
            acquire_timeout_seconds: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind_address: String,
    pub request_timeout_ms: u64,
    pub cors_enabled: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_ms: 30_000,
            cors_enabled: true,
        }
    }
}

impl WebConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl TrackerConfig {
    /// Reject values the service cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(TrackerError::configuration("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(TrackerError::configuration(
                "database.max_connections must be greater than zero",
            ));
        }
        if self.web.bind_address.trim().is_empty() {
            return Err(TrackerError::configuration("web.bind_address must not be empty"));
        }
        if self.web.request_timeout_ms == 0 {
            return Err(TrackerError::configuration(
                "web.request_timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}
