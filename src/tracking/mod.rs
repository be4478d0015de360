//! # Process Tracking
//!
//! The reporting core: index the catalog, resolve each unit's window, format
//! the steps and assemble one record per unit.

pub mod catalog;
pub mod formatter;
pub mod report;
pub mod service;
pub mod window;

pub use catalog::ProcessCatalog;
pub use formatter::{format_step, format_steps, OperatorInfo, StepDetail};
pub use report::{assemble_report, assemble_unit_status, UnitProcessStatus};
pub use service::ProcessTrackingService;
pub use window::{resolve_window, StepWindow};
