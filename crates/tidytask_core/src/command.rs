//! Mutation intents executed against the store.
//!
//! # Responsibility
//! - Carry named, parameterized mutation intents from the facade to the
//!   store.
//!
//! # Invariants
//! - Commands never manage history themselves; the history controller wraps
//!   their execution.
//! - Execution has no return value; outcomes are observed through the store.

use crate::model::task::TaskId;
use crate::store::task_store::TaskStore;

/// Closed set of mutation intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new task with the given raw title.
    Add { title: String },
    /// Remove the task with the given handle.
    Delete { id: TaskId },
    /// Flip the done flag of the task with the given handle.
    ToggleDone { id: TaskId },
}

impl Command {
    /// Executes this intent against `store`.
    ///
    /// Validation no-ops (blank title, absent handle) are absorbed by the
    /// store and surface here as nothing happening.
    pub fn execute(&self, store: &TaskStore) {
        match self {
            Self::Add { title } => {
                store.add(title);
            }
            Self::Delete { id } => {
                store.delete(*id);
            }
            Self::ToggleDone { id } => {
                store.toggle_done(*id);
            }
        }
    }
}
