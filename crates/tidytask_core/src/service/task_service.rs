//! Task list facade.
//!
//! # Responsibility
//! - Single entry point for view collaborators: intents in, ordered view out.
//! - Enforce input validation policy before any history entry is created.
//!
//! # Invariants
//! - Index-based intents resolve against the *currently displayed* order,
//!   not canonical order.
//! - Blank titles and out-of-range indices are dropped before a command is
//!   built, so they never push a history entry.
//! - View-mode changes bypass history: they are not undoable.
//! - The history lock is released before any store operation that notifies,
//!   so observers may call back into this facade during dispatch.

use crate::command::Command;
use crate::history::History;
use crate::model::task::Task;
use crate::order::OrderStrategy;
use crate::store::task_store::TaskStore;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Display mode selectable by the view collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Normal,
    CompletedLast,
}

impl ViewMode {
    fn strategy(self) -> OrderStrategy {
        match self {
            Self::Normal => OrderStrategy::Normal,
            Self::CompletedLast => OrderStrategy::CompletedLast,
        }
    }
}

/// Facade translating user intents into tracked command execution.
///
/// Holds a shared reference to the one authoritative store; construct both
/// at startup and pass them explicitly (no hidden global).
pub struct TaskService {
    store: Arc<TaskStore>,
    history: Mutex<History>,
}

impl TaskService {
    /// Creates a facade over `store` with an empty history.
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self {
            store,
            history: Mutex::new(History::new()),
        }
    }

    /// Shared handle to the underlying store, e.g. for observer registration.
    pub fn store(&self) -> &Arc<TaskStore> {
        &self.store
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a task with the given raw title.
    ///
    /// Blank input after trimming is dropped before any command is built:
    /// no state change, no notification, no history entry.
    pub fn add_task(&self, title: &str) {
        let Some(normalized) = crate::model::task::normalize_title(title) else {
            debug!("event=intent_dropped module=service status=noop reason=blank_title");
            return;
        };
        self.run_tracked(&Command::Add { title: normalized });
    }

    /// Deletes the task at `display_index` within the active ordering.
    ///
    /// Out-of-range indices are silently ignored.
    pub fn delete_at(&self, display_index: usize) {
        let Some(task) = self.task_at(display_index) else {
            return;
        };
        self.run_tracked(&Command::Delete { id: task.id });
    }

    /// Toggles the done flag of the task at `display_index`.
    ///
    /// Out-of-range indices are silently ignored.
    pub fn toggle_at(&self, display_index: usize) {
        let Some(task) = self.task_at(display_index) else {
            return;
        };
        self.run_tracked(&Command::ToggleDone { id: task.id });
    }

    // History bookkeeping happens under the lock; the guard is dropped
    // before the command executes, since execution triggers notification
    // and an observer may re-enter `can_undo`/`can_redo`.
    fn run_tracked(&self, command: &Command) {
        self.history().record(&self.store);
        command.execute(&self.store);
    }

    // Resolution happens at call time: index `i` means the i-th element of
    // whatever ordering is active right now.
    fn task_at(&self, display_index: usize) -> Option<Task> {
        let ordered = self.store.ordered();
        let task = ordered.into_iter().nth(display_index);
        if task.is_none() {
            debug!(
                "event=intent_dropped module=service status=noop reason=index_out_of_range index={display_index}"
            );
        }
        task
    }

    /// Reverts the most recent tracked command, if any.
    pub fn undo(&self) {
        let snapshot = self.history().pop_undo(&self.store);
        if let Some(snapshot) = snapshot {
            self.store.restore(&snapshot);
        }
    }

    /// Re-applies the most recently undone command, if any.
    pub fn redo(&self) {
        let snapshot = self.history().pop_redo(&self.store);
        if let Some(snapshot) = snapshot {
            self.store.restore(&snapshot);
        }
    }

    /// Returns whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history().can_undo()
    }

    /// Returns whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history().can_redo()
    }

    /// Swaps the display ordering. Not tracked by history.
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.store.set_order_strategy(mode.strategy());
    }

    /// Returns the active display mode.
    pub fn view_mode(&self) -> ViewMode {
        match self.store.order_strategy() {
            OrderStrategy::Normal => ViewMode::Normal,
            OrderStrategy::CompletedLast => ViewMode::CompletedLast,
        }
    }

    /// Read-only ordered projection for rendering.
    pub fn ordered_tasks(&self) -> Vec<Task> {
        self.store.ordered()
    }
}
