//! Use-case facade over store, commands and history.
//!
//! # Responsibility
//! - Translate raw UI intents into command execution with undo tracking.
//! - Resolve display indices against the active ordering at call time.

pub mod task_service;
