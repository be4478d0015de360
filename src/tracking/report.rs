//! # Report Assembler
//!
//! Turns each (assignment, unit) pair into one process-status record.
//! Unresolved units are reported, never dropped.

use serde::{Deserialize, Serialize};

use super::catalog::ProcessCatalog;
use super::formatter::{format_operators, format_steps, OperatorInfo, StepDetail};
use super::window::resolve_window;
use crate::constants::UNRESOLVED_STEP_NAME;
use crate::models::{AssignedUnit, Unit, UnitAssignment};

/// Where one unit stands in the process flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitProcessStatus {
    #[serde(rename = "assigned_pcb_id")]
    pub unit_id: String,
    pub serial_no: Option<String>,
    pub current_step_id: Option<i32>,
    pub current_step_order: Option<i32>,
    pub current_step_name: String,
    pub current_step_operators: Vec<OperatorInfo>,
    pub previous_steps: Vec<StepDetail>,
    pub next_steps: Vec<StepDetail>,
}

impl UnitProcessStatus {
    pub fn is_resolved(&self) -> bool {
        self.current_step_order.is_some()
    }
}

/// Build the record for one unit
pub fn assemble_unit_status(
    catalog: &ProcessCatalog,
    assignment: &UnitAssignment,
    unit: &Unit,
) -> UnitProcessStatus {
    let window = resolve_window(catalog, assignment.current_step_id);

    UnitProcessStatus {
        unit_id: assignment.unit_id.clone(),
        serial_no: unit.serial_no.clone(),
        current_step_id: assignment.current_step_id,
        current_step_order: window.current.map(|step| step.order_rank),
        current_step_name: window
            .current
            .map_or_else(|| UNRESOLVED_STEP_NAME.to_string(), |step| step.step_name.clone()),
        current_step_operators: window
            .current
            .map(|step| format_operators(&step.qualified_operators))
            .unwrap_or_default(),
        previous_steps: format_steps(window.previous),
        next_steps: format_steps(window.next),
    }
}

/// Build one record per pair, in the order the pairs were given
pub fn assemble_report(
    catalog: &ProcessCatalog,
    assigned_units: &[AssignedUnit],
) -> Vec<UnitProcessStatus> {
    assigned_units
        .iter()
        .map(|(assignment, unit)| assemble_unit_status(catalog, assignment, unit))
        .collect()
}
