//! Shared fixtures for integration tests

#![allow(dead_code)] // Each test binary uses a different subset

use std::sync::Arc;

use pcb_tracker::config::WebConfig;
use pcb_tracker::models::{AssignedUnit, Operator, ProcessStep, Unit, UnitAssignment};
use pcb_tracker::repository::InMemoryTrackingRepository;
use pcb_tracker::tracking::ProcessTrackingService;
use pcb_tracker::web::{create_app, AppState};

/// Four-step line: SMT → Reflow → AOI → Test
pub fn scenario_catalog() -> Vec<ProcessStep> {
    vec![
        ProcessStep::new(1, 1, "SMT").with_operators(vec![
            Operator::new("S001", "Anil", Some("MRL3")),
            Operator::new("S002", "Bea", Some("MRL2")),
        ]),
        ProcessStep::new(2, 2, "Reflow")
            .with_operators(vec![Operator::new("S003", "Chen", None)]),
        ProcessStep::new(3, 3, "AOI")
            .with_operators(vec![Operator::new("S004", "Dara", Some("MRL4"))]),
        ProcessStep::new(4, 4, "Test"),
    ]
}

/// `len` steps with ids 1..=len and rank 10 * id
pub fn linear_catalog(len: i32) -> Vec<ProcessStep> {
    (1..=len)
        .map(|id| ProcessStep::new(id, id * 10, format!("Step {id}")))
        .collect()
}

pub fn assigned(unit_id: &str, current_step_id: Option<i32>, serial_no: &str) -> AssignedUnit {
    (
        UnitAssignment::new(unit_id, current_step_id),
        Unit::new(unit_id, Some(serial_no)),
    )
}

pub fn repository(
    catalog: Vec<ProcessStep>,
    units: Vec<AssignedUnit>,
) -> Arc<InMemoryTrackingRepository> {
    Arc::new(InMemoryTrackingRepository::new(catalog, units))
}

pub fn service(catalog: Vec<ProcessStep>, units: Vec<AssignedUnit>) -> ProcessTrackingService {
    ProcessTrackingService::new(repository(catalog, units))
}

pub fn app(repository: Arc<InMemoryTrackingRepository>) -> axum::Router {
    create_app(AppState::new(WebConfig::default(), repository))
}
