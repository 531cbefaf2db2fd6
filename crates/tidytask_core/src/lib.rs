//! Core domain logic for TidyTask.
//! This crate is the single source of truth for task-list invariants:
//! every mutation is observable, reversible, and totally ordered.

pub mod command;
pub mod history;
pub mod logging;
pub mod model;
pub mod order;
pub mod service;
pub mod store;

pub use command::Command;
pub use history::History;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snapshot::{TaskRecord, TaskSnapshot};
pub use model::task::{normalize_title, Task, TaskId};
pub use order::OrderStrategy;
pub use service::task_service::{TaskService, ViewMode};
pub use store::task_store::{ChangeObserver, ObserverId, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
