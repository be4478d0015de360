//! # Reporting Constants
//!
//! Fixed values that shape the process-tracking report.

/// Number of neighbouring catalog steps reported on each side of the current step
pub const STEP_WINDOW_SIZE: usize = 3;

/// Display name reported for units whose current step is missing from the catalog
pub const UNRESOLVED_STEP_NAME: &str = "Unknown/Not Started";

/// Route serving the process-tracking report
pub const TRACKING_ROUTE: &str = "/pcb-process-tracking";

/// Environment variables consulted, in order, to pick the configuration environment
pub const ENVIRONMENT_VARIABLES: [&str; 2] = ["PCB_TRACKER_ENV", "APP_ENV"];

/// Prefix for configuration overrides supplied through the environment
pub const CONFIG_ENV_PREFIX: &str = "PCB_TRACKER";

