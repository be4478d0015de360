//! # Unit Assignment Model
//!
//! Which process step each physical PCB currently occupies, joined with the
//! unit's own record for its serial number.
//!
//! ## Database Schema
//!
//! ```sql
//! CREATE TABLE pcb_assignment (
//!   assigned_pcb_id VARCHAR PRIMARY KEY,
//!   current_step_id INTEGER
//! );
//! CREATE TABLE pcb_data (
//!   pcb_serial_no_part_number VARCHAR PRIMARY KEY,
//!   serial_no VARCHAR
//! );
//! ```
//!
//! `current_step_id` is deliberately not a foreign key: it may be null or
//! reference a step that is not in the catalog.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A unit's position claim in the process flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAssignment {
    pub unit_id: String,
    pub current_step_id: Option<i32>,
}

/// The physical assembly unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_id: String,
    pub serial_no: Option<String>,
}

/// An assignment paired with the unit it refers to
pub type AssignedUnit = (UnitAssignment, Unit);

#[derive(Debug, FromRow)]
struct AssignedUnitRow {
    assigned_pcb_id: String,
    current_step_id: Option<i32>,
    pcb_serial_no_part_number: String,
    serial_no: Option<String>,
}

impl AssignedUnitRow {
    fn into_assigned_unit(self) -> AssignedUnit {
        (
            UnitAssignment {
                unit_id: self.assigned_pcb_id,
                current_step_id: self.current_step_id,
            },
            Unit {
                unit_id: self.pcb_serial_no_part_number,
                serial_no: self.serial_no,
            },
        )
    }
}

impl UnitAssignment {
    pub fn new(unit_id: impl Into<String>, current_step_id: Option<i32>) -> Self {
        Self {
            unit_id: unit_id.into(),
            current_step_id,
        }
    }

    /// Load every assignment joined with its unit in a single statement.
    ///
    /// Assignments without a matching unit row are not returned. Rows are
    /// ordered by unit id so that repeated reads of unchanged data agree.
    pub async fn list_with_units(pool: &PgPool) -> Result<Vec<AssignedUnit>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AssignedUnitRow>(
            r#"
            SELECT a.assigned_pcb_id, a.current_step_id,
                   d.pcb_serial_no_part_number, d.serial_no
            FROM pcb_assignment a
            INNER JOIN pcb_data d ON d.pcb_serial_no_part_number = a.assigned_pcb_id
            ORDER BY a.assigned_pcb_id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(AssignedUnitRow::into_assigned_unit).collect())
    }
}

impl Unit {
    pub fn new(unit_id: impl Into<String>, serial_no: Option<&str>) -> Self {
        Self {
            unit_id: unit_id.into(),
            serial_no: serial_no.map(str::to_string),
        }
    }
}
