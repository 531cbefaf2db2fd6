//! Point-in-time snapshot of the task collection.
//!
//! # Responsibility
//! - Capture immutable value copies of every task for undo/redo.
//! - Rebuild a fresh, observationally identical collection on restore.
//!
//! # Invariants
//! - A snapshot shares no mutable state with the live collection.
//! - `capture` then `materialize` reproduces the same titles, done flags and
//!   order, but with freshly generated `TaskId`s.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Recorded value of a single task at capture time.
///
/// Deliberately excludes the `TaskId`: identity is not part of the recorded
/// value, so restore always mints new handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    pub done: bool,
}

/// Immutable deep copy of the whole collection in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSnapshot {
    records: Vec<TaskRecord>,
}

impl TaskSnapshot {
    /// Captures value copies of `tasks` in their canonical order.
    pub fn capture(tasks: &[Task]) -> Self {
        let records = tasks
            .iter()
            .map(|task| TaskRecord {
                title: task.title.clone(),
                done: task.done,
            })
            .collect();
        Self { records }
    }

    /// Builds a fresh collection matching this snapshot's recorded values.
    ///
    /// Every returned task carries a new `TaskId`; handles held before the
    /// restore are stale afterwards.
    pub fn materialize(&self) -> Vec<Task> {
        self.records
            .iter()
            .map(|record| Task::with_state(record.title.clone(), record.done))
            .collect()
    }

    /// Number of recorded tasks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the snapshot recorded an empty collection.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read access to the recorded values, in canonical order.
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }
}
