//! # Tracking Repository
//!
//! The data-access seam of the service. A report needs exactly two bulk reads,
//! the process catalog and the assignment/unit join, both issued once per
//! request regardless of how many units are reported.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AssignedUnit, ProcessStep};

pub use memory::InMemoryTrackingRepository;
pub use postgres::PgTrackingRepository;

/// Read-only source of catalog and assignment data
#[async_trait]
pub trait TrackingRepository: Send + Sync {
    /// Full process catalog ordered by rank (ties by step id) with rosters attached
    async fn fetch_process_catalog(&self) -> Result<Vec<ProcessStep>>;

    /// Every assignment paired with its unit, in a stable order
    async fn fetch_assigned_units(&self) -> Result<Vec<AssignedUnit>>;

    /// Probe that the backing store answers
    async fn health_check(&self) -> Result<()>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}
