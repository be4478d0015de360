//! # Catalog Indexer
//!
//! Holds the rank-ordered process flow for the span of one report and maps
//! each step id to its zero-based catalog position.

use std::collections::HashMap;

use crate::models::ProcessStep;

/// Rank-ordered process flow with an id → position index
#[derive(Debug, Clone, Default)]
pub struct ProcessCatalog {
    steps: Vec<ProcessStep>,
    positions: HashMap<i32, usize>,
}

impl ProcessCatalog {
    /// Build the catalog from the loaded steps.
    ///
    /// Steps are put in `(order_rank, step_id)` order with a stable sort, so
    /// an input already in that order is left untouched. Should a step id
    /// appear twice, the first occurrence owns the index entry.
    pub fn new(mut steps: Vec<ProcessStep>) -> Self {
        steps.sort_by_key(ProcessStep::catalog_key);

        let mut positions = HashMap::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            positions.entry(step.step_id).or_insert(position);
        }

        Self { steps, positions }
    }

    /// Catalog position of a step id; `None` for a null or unknown id
    pub fn position_of(&self, step_id: Option<i32>) -> Option<usize> {
        step_id.and_then(|id| self.positions.get(&id).copied())
    }

    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    pub fn get(&self, position: usize) -> Option<&ProcessStep> {
        self.steps.get(position)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProcessCatalog {
        ProcessCatalog::new(vec![
            ProcessStep::new(30, 3, "AOI"),
            ProcessStep::new(10, 1, "SMT"),
            ProcessStep::new(20, 2, "Reflow"),
        ])
    }

    #[test]
    fn test_positions_follow_rank_order() {
        let catalog = catalog();

        assert_eq!(catalog.position_of(Some(10)), Some(0));
        assert_eq!(catalog.position_of(Some(20)), Some(1));
        assert_eq!(catalog.position_of(Some(30)), Some(2));
        assert_eq!(catalog.get(2).map(|s| s.step_name.as_str()), Some("AOI"));
    }

    #[test]
    fn test_unknown_and_null_ids_are_unresolved() {
        let catalog = catalog();

        assert_eq!(catalog.position_of(Some(999)), None);
        assert_eq!(catalog.position_of(None), None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProcessCatalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.position_of(Some(1)), None);
    }

    #[test]
    fn test_rank_ties_break_by_step_id() {
        let catalog = ProcessCatalog::new(vec![
            ProcessStep::new(5, 1, "Wash"),
            ProcessStep::new(2, 1, "Bake"),
        ]);

        assert_eq!(catalog.position_of(Some(2)), Some(0));
        assert_eq!(catalog.position_of(Some(5)), Some(1));
    }

    #[test]
    fn test_duplicate_id_keeps_first_position() {
        let catalog = ProcessCatalog::new(vec![
            ProcessStep::new(1, 1, "SMT"),
            ProcessStep::new(1, 2, "SMT rework"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position_of(Some(1)), Some(0));
    }
}
