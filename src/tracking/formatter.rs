//! # Step Formatter
//!
//! Pure mapping from catalog rows to the step-detail response shape.

use serde::{Deserialize, Serialize};

use crate::models::{Operator, ProcessStep};

/// Operator entry of a step roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    #[serde(rename = "operator_staff_no")]
    pub staff_no: String,
    #[serde(rename = "operator_name")]
    pub name: String,
    #[serde(rename = "operator_MRL")]
    pub qualification_level: Option<String>,
}

/// One formatted process step with its qualified operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDetail {
    pub step_id: i32,
    #[serde(rename = "step_order")]
    pub order_rank: i32,
    pub step_name: String,
    pub qualified_operators: Vec<OperatorInfo>,
}

impl From<&Operator> for OperatorInfo {
    fn from(operator: &Operator) -> Self {
        Self {
            staff_no: operator.staff_no.clone(),
            name: operator.name.clone(),
            qualification_level: operator.qualification_level.clone(),
        }
    }
}

impl From<&ProcessStep> for StepDetail {
    fn from(step: &ProcessStep) -> Self {
        Self {
            step_id: step.step_id,
            order_rank: step.order_rank,
            step_name: step.step_name.clone(),
            qualified_operators: format_operators(&step.qualified_operators),
        }
    }
}

/// Format a step the caller may not have; a missing step produces nothing
pub fn format_step(step: Option<&ProcessStep>) -> Option<StepDetail> {
    step.map(StepDetail::from)
}

/// Format a window slice, preserving its order
pub fn format_steps(steps: &[ProcessStep]) -> Vec<StepDetail> {
    steps.iter().filter_map(|step| format_step(Some(step))).collect()
}

pub fn format_operators(operators: &[Operator]) -> Vec<OperatorInfo> {
    operators.iter().map(OperatorInfo::from).collect()
}
