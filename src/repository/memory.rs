//! In-memory repository used by tests and local demos.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::TrackingRepository;
use crate::error::{Result, TrackerError};
use crate::models::{AssignedUnit, ProcessStep};

/// Repository holding a fixed catalog and assignment list.
///
/// Read counters let callers check how many bulk reads a report issued.
#[derive(Debug, Default)]
pub struct InMemoryTrackingRepository {
    catalog: Vec<ProcessStep>,
    assigned_units: Vec<AssignedUnit>,
    unavailable: bool,
    catalog_reads: AtomicUsize,
    assignment_reads: AtomicUsize,
}

impl InMemoryTrackingRepository {
    pub fn new(catalog: Vec<ProcessStep>, assigned_units: Vec<AssignedUnit>) -> Self {
        Self {
            catalog,
            assigned_units,
            ..Self::default()
        }
    }

    /// A repository whose every read fails as if the store were unreachable
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn catalog_reads(&self) -> usize {
        self.catalog_reads.load(Ordering::SeqCst)
    }

    pub fn assignment_reads(&self) -> usize {
        self.assignment_reads.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(TrackerError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TrackingRepository for InMemoryTrackingRepository {
    async fn fetch_process_catalog(&self) -> Result<Vec<ProcessStep>> {
        self.catalog_reads.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        let mut catalog = self.catalog.clone();
        catalog.sort_by_key(ProcessStep::catalog_key);
        Ok(catalog)
    }

    async fn fetch_assigned_units(&self) -> Result<Vec<AssignedUnit>> {
        self.assignment_reads.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;
        Ok(self.assigned_units.clone())
    }

    async fn health_check(&self) -> Result<()> {
        self.ensure_available()
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
