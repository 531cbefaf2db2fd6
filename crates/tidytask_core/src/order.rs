//! Display ordering strategies.
//!
//! # Responsibility
//! - Transform the canonical task sequence into a display order.
//!
//! # Invariants
//! - Strategies are pure: no mutation of the input, no side effects.
//! - Strategies are total: empty input yields empty output.
//! - Canonical storage order is never affected by the active strategy.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Closed set of interchangeable display orderings.
///
/// Kept as an enum rather than a trait object: the variant set is fixed and
/// enumerable, and callers select one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStrategy {
    /// Identity: canonical insertion order.
    #[default]
    Normal,
    /// Stable partition: open tasks first, completed tasks last, relative
    /// order preserved within each partition.
    CompletedLast,
}

impl OrderStrategy {
    /// Applies this strategy to `tasks`, returning the display order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        match self {
            Self::Normal => tasks.to_vec(),
            Self::CompletedLast => {
                let mut open: Vec<Task> = Vec::with_capacity(tasks.len());
                let mut finished: Vec<Task> = Vec::new();
                for task in tasks {
                    if task.done {
                        finished.push(task.clone());
                    } else {
                        open.push(task.clone());
                    }
                }
                open.append(&mut finished);
                open
            }
        }
    }
}
