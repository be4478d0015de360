//! # Data Layer
//!
//! Row types for the manufacturing store. All entities are owned by the
//! store; this crate only reads them.

pub mod operator;
pub mod process_step;
pub mod unit_assignment;

pub use operator::Operator;
pub use process_step::ProcessStep;
pub use unit_assignment::{AssignedUnit, Unit, UnitAssignment};
