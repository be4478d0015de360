//! # Process Step Model
//!
//! Catalog entries of the manufacturing process flow and the operators
//! qualified to perform them.
//!
//! ## Database Schema
//!
//! Maps to `process_flow_master`, with qualifications held in the
//! `process_flow_qualified_operators` join table against `operator_master`:
//! ```sql
//! CREATE TABLE process_flow_master (
//!   flow_step_id INTEGER PRIMARY KEY,
//!   step_order INTEGER NOT NULL,
//!   step_name VARCHAR NOT NULL
//! );
//! ```
//!
//! ## Loading
//!
//! [`ProcessStep::list_catalog`] reads the complete flow in two statements, one
//! for the steps and one for every qualification row, and attaches rosters in
//! memory. The cost is independent of how many units are later resolved
//! against the catalog.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

use super::operator::Operator;

/// One step of the process flow.
///
/// `order_rank` totally orders the catalog; previous/next relationships are
/// purely positional within that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProcessStep {
    #[sqlx(rename = "flow_step_id")]
    pub step_id: i32,
    #[sqlx(rename = "step_order")]
    pub order_rank: i32,
    pub step_name: String,
    #[sqlx(skip)]
    pub qualified_operators: Vec<Operator>,
}

/// Row of the step/operator qualification join
#[derive(Debug, Clone, FromRow)]
struct StepQualification {
    flow_step_id: i32,
    #[sqlx(flatten)]
    operator: Operator,
}

impl ProcessStep {
    pub fn new(step_id: i32, order_rank: i32, step_name: impl Into<String>) -> Self {
        Self {
            step_id,
            order_rank,
            step_name: step_name.into(),
            qualified_operators: Vec::new(),
        }
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.qualified_operators = operators;
        self
    }

    /// Sort key of the catalog: rank first, ties broken by step id
    pub fn catalog_key(&self) -> (i32, i32) {
        (self.order_rank, self.step_id)
    }

    /// Load the full catalog, rank-ordered, with operator rosters attached
    pub async fn list_catalog(pool: &PgPool) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let mut steps = sqlx::query_as::<_, ProcessStep>(
            r#"
            SELECT flow_step_id, step_order, step_name
            FROM process_flow_master
            ORDER BY step_order ASC, flow_step_id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        let qualifications = sqlx::query_as::<_, StepQualification>(
            r#"
            SELECT q.flow_step_id, o.operator_staff_no, o.operator_name, o.operator_mrl
            FROM process_flow_qualified_operators q
            INNER JOIN operator_master o ON o.operator_staff_no = q.operator_staff_no
            ORDER BY q.flow_step_id ASC, o.operator_staff_no ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        let mut rosters: HashMap<i32, Vec<Operator>> = HashMap::new();
        for qualification in qualifications {
            rosters
                .entry(qualification.flow_step_id)
                .or_default()
                .push(qualification.operator);
        }

        for step in &mut steps {
            if let Some(roster) = rosters.remove(&step.step_id) {
                step.qualified_operators = roster;
            }
        }

        Ok(steps)
    }
}
