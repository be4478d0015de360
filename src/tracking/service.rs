//! # Process Tracking Service
//!
//! Runs one report: two bulk reads, then in-memory assembly. The catalog is
//! loaded per request and dropped with it; there is no process-wide cache.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use super::catalog::ProcessCatalog;
use super::report::{assemble_report, UnitProcessStatus};
use crate::error::Result;
use crate::logging::{log_error, log_report_operation};
use crate::repository::TrackingRepository;

#[derive(Clone)]
pub struct ProcessTrackingService {
    repository: Arc<dyn TrackingRepository>,
}

impl ProcessTrackingService {
    pub fn new(repository: Arc<dyn TrackingRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn TrackingRepository> {
        &self.repository
    }

    /// Current, previous and next steps for every assigned unit
    #[instrument(skip(self), fields(backend = self.repository.backend_name()))]
    pub async fn pcb_process_tracking(&self) -> Result<Vec<UnitProcessStatus>> {
        let started = Instant::now();

        let steps = self
            .repository
            .fetch_process_catalog()
            .await
            .inspect_err(|e| log_error("tracking_service", "fetch_process_catalog", &e.to_string()))?;
        let catalog = ProcessCatalog::new(steps);
        debug!(catalog_size = catalog.len(), "Indexed process catalog");

        let assigned_units = self
            .repository
            .fetch_assigned_units()
            .await
            .inspect_err(|e| log_error("tracking_service", "fetch_assigned_units", &e.to_string()))?;

        let report = assemble_report(&catalog, &assigned_units);

        let unresolved = report.iter().filter(|status| !status.is_resolved()).count();
        log_report_operation(
            report.len(),
            catalog.len(),
            unresolved,
            started.elapsed().as_millis() as u64,
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessStep, Unit, UnitAssignment};
    use crate::repository::InMemoryTrackingRepository;

    #[tokio::test]
    async fn test_report_issues_one_read_per_source() {
        let repository = Arc::new(InMemoryTrackingRepository::new(
            vec![ProcessStep::new(1, 1, "SMT"), ProcessStep::new(2, 2, "Reflow")],
            (0..25)
                .map(|i| {
                    let id = format!("PCB-{i:03}");
                    (
                        UnitAssignment::new(id.clone(), Some(1 + i % 2)),
                        Unit::new(id, None),
                    )
                })
                .collect(),
        ));
        let service = ProcessTrackingService::new(repository.clone());

        let report = service.pcb_process_tracking().await.unwrap();
        assert_eq!(report.len(), 25);
        assert_eq!(repository.catalog_reads(), 1);
        assert_eq!(repository.assignment_reads(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service =
            ProcessTrackingService::new(Arc::new(InMemoryTrackingRepository::unavailable()));

        assert!(service.pcb_process_tracking().await.is_err());
    }
}
