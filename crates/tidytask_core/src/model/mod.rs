//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its stable handle type.
//! - Define the immutable snapshot shape used by undo/redo.
//!
//! # Invariants
//! - Every live task is identified by a stable `TaskId`; equal titles do not
//!   imply equal identity.
//! - Snapshots never share mutable state with the live collection.

pub mod snapshot;
pub mod task;
