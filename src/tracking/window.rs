//! # Window Resolver
//!
//! Slices the catalog around a unit's current step: up to
//! [`STEP_WINDOW_SIZE`] steps on each side, never including the current step
//! and never leaving the catalog bounds.

use super::catalog::ProcessCatalog;
use crate::constants::STEP_WINDOW_SIZE;
use crate::models::ProcessStep;

/// The neighbourhood of a unit's current step, borrowed from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWindow<'a> {
    pub position: Option<usize>,
    pub current: Option<&'a ProcessStep>,
    /// Preceding steps, oldest first
    pub previous: &'a [ProcessStep],
    /// Following steps, nearest first
    pub next: &'a [ProcessStep],
}

impl<'a> StepWindow<'a> {
    /// Window of a unit whose step is not in the catalog
    pub fn unresolved() -> Self {
        Self {
            position: None,
            current: None,
            previous: &[],
            next: &[],
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.current.is_some()
    }
}

/// Resolve the window for `current_step_id`; unknown or null ids yield
/// [`StepWindow::unresolved`]
pub fn resolve_window(catalog: &ProcessCatalog, current_step_id: Option<i32>) -> StepWindow<'_> {
    let Some(position) = catalog.position_of(current_step_id) else {
        return StepWindow::unresolved();
    };

    let steps = catalog.steps();
    let previous_start = position.saturating_sub(STEP_WINDOW_SIZE);
    let next_end = steps.len().min(position + 1 + STEP_WINDOW_SIZE);

    StepWindow {
        position: Some(position),
        current: steps.get(position),
        previous: &steps[previous_start..position],
        next: &steps[position + 1..next_end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_catalog(len: i32) -> ProcessCatalog {
        ProcessCatalog::new(
            (1..=len)
                .map(|i| ProcessStep::new(i, i, format!("Step {i}")))
                .collect(),
        )
    }

    fn ids(steps: &[ProcessStep]) -> Vec<i32> {
        steps.iter().map(|s| s.step_id).collect()
    }

    #[test]
    fn test_window_in_middle_of_catalog() {
        let catalog = linear_catalog(10);
        let window = resolve_window(&catalog, Some(6));

        assert_eq!(window.position, Some(5));
        assert_eq!(ids(window.previous), vec![3, 4, 5]);
        assert_eq!(ids(window.next), vec![7, 8, 9]);
        assert_eq!(window.current.map(|s| s.step_id), Some(6));
    }

    #[test]
    fn test_window_at_catalog_start() {
        let catalog = linear_catalog(10);
        let window = resolve_window(&catalog, Some(1));

        assert!(window.previous.is_empty());
        assert_eq!(ids(window.next), vec![2, 3, 4]);
    }

    #[test]
    fn test_window_at_catalog_end() {
        let catalog = linear_catalog(10);
        let window = resolve_window(&catalog, Some(9));

        assert_eq!(ids(window.previous), vec![6, 7, 8]);
        assert_eq!(ids(window.next), vec![10]);

        let last = resolve_window(&catalog, Some(10));
        assert!(last.next.is_empty());
    }

    #[test]
    fn test_single_step_catalog() {
        let catalog = linear_catalog(1);
        let window = resolve_window(&catalog, Some(1));

        assert!(window.is_resolved());
        assert!(window.previous.is_empty());
        assert!(window.next.is_empty());
    }

    #[test]
    fn test_unknown_step_is_unresolved() {
        let catalog = linear_catalog(4);

        assert_eq!(resolve_window(&catalog, Some(999)), StepWindow::unresolved());
        assert_eq!(resolve_window(&catalog, None), StepWindow::unresolved());
        assert!(!StepWindow::unresolved().is_resolved());
    }
}
