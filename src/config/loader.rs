//! Configuration Loader
//!
//! Environment-aware configuration loading built on the `config` crate.
//! Handles environment detection, layered TOML discovery and environment
//! variable overrides.

use ::config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::TrackerConfig;
use crate::constants::{CONFIG_ENV_PREFIX, ENVIRONMENT_VARIABLES};
use crate::error::Result;

const BASE_CONFIG_FILE: &str = "tracker.toml";

/// Loaded, validated configuration together with where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: TrackerConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection from `./config`
    pub fn load() -> Result<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment.
    /// Useful for tests that must not depend on the process environment.
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(|| PathBuf::from("config"));

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config = Self::load_layered(&config_directory, environment)?;
        config.validate()?;

        debug!(
            config = %Self::sanitize_config_for_logging(&config),
            "Resolved configuration"
        );
        info!(
            environment = environment,
            bind_address = %config.web.bind_address,
            max_connections = config.database.max_connections,
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// Sanitized configuration for debugging, with credentials masked
    pub fn debug_config(&self) -> serde_json::Value {
        Self::sanitize_config_for_logging(&self.config)
    }

    fn load_layered(config_directory: &Path, environment: &str) -> Result<TrackerConfig> {
        let base_file = config_directory.join(BASE_CONFIG_FILE);
        let environment_file = config_directory.join(format!("tracker.{environment}.toml"));

        let mut config: TrackerConfig = Config::builder()
            .add_source(File::from(base_file).required(false))
            .add_source(File::from(environment_file).required(false))
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Ok(database_url) = env::var("DATABASE_URL") {
            debug!("DATABASE_URL overrides database.url");
            config.database.url = database_url;
        }

        Ok(config)
    }

    /// Detect current environment, falling back to `development`
    pub fn detect_environment() -> String {
        ENVIRONMENT_VARIABLES
            .iter()
            .find_map(|name| env::var(name).ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "development".to_string())
            .to_lowercase()
    }

    fn sanitize_config_for_logging(config: &TrackerConfig) -> serde_json::Value {
        let mut config_json = serde_json::json!(config);
        if let Some(url) = config_json.pointer_mut("/database/url") {
            *url = serde_json::Value::String(mask_database_url(&config.database.url));
        }
        config_json
    }
}

/// Mask the password component of a connection URL
pub(crate) fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let Some(at_offset) = url[authority_start..].find('@') else {
        return url.to_string();
    };
    let userinfo = &url[authority_start..authority_start + at_offset];

    match userinfo.split_once(':') {
        Some((user, _password)) => format!(
            "{}{}:***{}",
            &url[..authority_start],
            user,
            &url[authority_start + at_offset..]
        ),
        None => url.to_string(),
    }
}
