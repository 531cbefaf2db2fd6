//! Task domain record.
//!
//! # Responsibility
//! - Define the canonical task shape owned by the store.
//! - Centralize the title normalization rule shared by add/validation paths.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the task and never reused.
//! - `title` is always non-blank and pre-trimmed once a task exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a live task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical task record.
///
/// Constructed only by the store (add and snapshot-restore paths); callers
/// outside the store observe value copies and never mutate a task directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable handle used by index-free mutation intents.
    pub id: TaskId,
    /// Trimmed, non-blank display title.
    pub title: String,
    /// Completion flag toggled by the store.
    pub done: bool,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    ///
    /// The caller is responsible for passing an already-normalized title;
    /// see [`normalize_title`].
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_state(title, false)
    }

    /// Creates a task with an explicit done flag.
    ///
    /// Used by the snapshot-restore path, where completion state is part of
    /// the recorded value. A fresh `TaskId` is always generated: restored
    /// tasks are new entities and previously-held handles go stale.
    pub fn with_state(title: impl Into<String>, done: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done,
        }
    }
}

/// Normalizes user-entered title input.
///
/// Returns the trimmed title, or `None` when the input is blank after
/// trimming. Blank input is a validation no-op everywhere in this crate:
/// no task, no notification, no history entry.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
