//! Linear undo/redo over full-state snapshots.
//!
//! # Responsibility
//! - Wrap command execution in a two-stack snapshot history.
//!
//! # Invariants
//! - Running any new command clears the redo stack (no branching timelines).
//! - The snapshot pushed by `run` captures the state *before* the command.
//! - Undo/redo on an empty stack is a silent no-op.
//!
//! Full-state snapshots are O(collection size) per step and per history
//! entry; fine at task-list scale. Revisit as reversible diffs if that ever
//! changes.

use crate::command::Command;
use crate::model::snapshot::TaskSnapshot;
use crate::store::task_store::TaskStore;
use log::{debug, info};

/// Two-stack snapshot history controller.
#[derive(Default)]
pub struct History {
    undo_stack: Vec<TaskSnapshot>,
    redo_stack: Vec<TaskSnapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `store`'s current state as the pre-command snapshot and
    /// clears the redo stack.
    ///
    /// Split-phase half of [`History::run`] for callers that serialize
    /// history access behind a lock: only stack bookkeeping happens here, so
    /// the subsequent command execution (and the change notification it
    /// triggers) can run with no history lock held.
    pub fn record(&mut self, store: &TaskStore) {
        self.undo_stack.push(store.snapshot());
        self.redo_stack.clear();
        info!(
            "event=command_recorded module=history status=ok undo_depth={}",
            self.undo_stack.len()
        );
    }

    /// Executes `command` against `store`, recording the pre-state for undo.
    pub fn run(&mut self, store: &TaskStore, command: &Command) {
        self.record(store);
        command.execute(store);
    }

    /// Pops the next undo step, recording the current state for redo.
    ///
    /// Returns the snapshot the caller must restore, or `None` when the
    /// undo stack is empty. Split-phase half of [`History::undo`]; the
    /// restore (and its notification) belongs outside any history lock.
    pub fn pop_undo(&mut self, store: &TaskStore) -> Option<TaskSnapshot> {
        let Some(snapshot) = self.undo_stack.pop() else {
            debug!("event=undo_skipped module=history status=noop reason=empty_stack");
            return None;
        };
        self.redo_stack.push(store.snapshot());
        info!(
            "event=undo module=history status=ok undo_depth={} redo_depth={}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(snapshot)
    }

    /// Pops the next redo step, recording the current state for undo.
    ///
    /// Symmetric to [`History::pop_undo`].
    pub fn pop_redo(&mut self, store: &TaskStore) -> Option<TaskSnapshot> {
        let Some(snapshot) = self.redo_stack.pop() else {
            debug!("event=redo_skipped module=history status=noop reason=empty_stack");
            return None;
        };
        self.undo_stack.push(store.snapshot());
        info!(
            "event=redo module=history status=ok undo_depth={} redo_depth={}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(snapshot)
    }

    /// Restores the most recent pre-command state, if any.
    pub fn undo(&mut self, store: &TaskStore) {
        if let Some(snapshot) = self.pop_undo(store) {
            store.restore(&snapshot);
        }
    }

    /// Re-applies the most recently undone state, if any.
    pub fn redo(&mut self, store: &TaskStore) {
        if let Some(snapshot) = self.pop_redo(store) {
            store.restore(&snapshot);
        }
    }

    /// Returns whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
