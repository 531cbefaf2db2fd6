//! Task store: canonical collection, snapshots and observers.
//!
//! # Responsibility
//! - Apply add/delete/toggle mutations to the authoritative collection.
//! - Produce snapshots and restore from them for undo/redo.
//! - Notify registered observers after each state-affecting operation.
//!
//! # Invariants
//! - Canonical order is insertion order and is independent of the active
//!   display strategy.
//! - Invalid input (blank title, absent handle) is a silent no-op: no state
//!   change and no notification.
//! - Every mutation is atomic: fully applied or fully skipped.
//! - Notification dispatch happens strictly after the collection lock is
//!   released, so observers may safely call back into the store.

use crate::model::snapshot::TaskSnapshot;
use crate::model::task::{normalize_title, Task, TaskId};
use crate::order::OrderStrategy;
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by observer registration, used for removal.
pub type ObserverId = u64;

/// Callback surface for the view collaborator.
///
/// The signal is deliberately zero-argument: observers re-query the ordered
/// view instead of receiving a diff.
pub trait ChangeObserver: Send + Sync {
    /// Called after any state-affecting store operation.
    fn on_tasks_changed(&self);
}

struct StoreState {
    tasks: Vec<Task>,
    strategy: OrderStrategy,
}

struct ObserverRegistry {
    next_id: ObserverId,
    entries: Vec<(ObserverId, Arc<dyn ChangeObserver>)>,
}

/// Single authoritative owner of the task collection.
///
/// Constructed once at startup and shared by reference (`Arc`); there is no
/// hidden global instance.
pub struct TaskStore {
    state: Mutex<StoreState>,
    observers: Mutex<ObserverRegistry>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store with the `Normal` display strategy.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                tasks: Vec::new(),
                strategy: OrderStrategy::Normal,
            }),
            observers: Mutex::new(ObserverRegistry {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    // Single-writer model: on poison the collection is still structurally
    // valid (every mutation completes before unlock), so recover the guard.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry(&self) -> MutexGuard<'_, ObserverRegistry> {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers an observer; returns a handle for later removal.
    pub fn add_observer(&self, observer: Arc<dyn ChangeObserver>) -> ObserverId {
        let mut registry = self.registry();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, observer));
        id
    }

    /// Removes a previously registered observer; unknown ids are ignored.
    pub fn remove_observer(&self, id: ObserverId) {
        self.registry().entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn notify_observers(&self) {
        // Clone the Arc list first so no store lock is held during dispatch;
        // an observer is allowed to call back into the store.
        let observers: Vec<Arc<dyn ChangeObserver>> = self
            .registry()
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_tasks_changed();
        }
    }

    /// Appends a new open task with the trimmed `title`.
    ///
    /// Blank input (empty after trimming) is a validation no-op: returns
    /// `None` without touching state or notifying.
    pub fn add(&self, title: &str) -> Option<TaskId> {
        let Some(normalized) = normalize_title(title) else {
            debug!("event=task_add_skipped module=store status=noop reason=blank_title");
            return None;
        };

        let task = Task::new(normalized);
        let id = task.id;
        {
            let mut state = self.state();
            state.tasks.push(task);
            info!(
                "event=task_added module=store status=ok task_id={id} total={}",
                state.tasks.len()
            );
        }
        self.notify_observers();
        Some(id)
    }

    /// Removes the task with handle `id`; absent handles are a silent no-op.
    ///
    /// Returns whether a task was removed.
    pub fn delete(&self, id: TaskId) -> bool {
        let removed = {
            let mut state = self.state();
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            state.tasks.len() != before
        };
        if removed {
            info!("event=task_deleted module=store status=ok task_id={id}");
            self.notify_observers();
        } else {
            debug!("event=task_delete_skipped module=store status=noop task_id={id}");
        }
        removed
    }

    /// Flips the done flag of the task with handle `id`.
    ///
    /// Absent handles are a silent no-op. Returns whether a task changed.
    pub fn toggle_done(&self, id: TaskId) -> bool {
        let toggled = {
            let mut state = self.state();
            match state.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    task.done = !task.done;
                    Some(task.done)
                }
                None => None,
            }
        };
        match toggled {
            Some(done) => {
                info!("event=task_toggled module=store status=ok task_id={id} done={done}");
                self.notify_observers();
                true
            }
            None => {
                debug!("event=task_toggle_skipped module=store status=noop task_id={id}");
                false
            }
        }
    }

    /// Replaces the active display strategy.
    ///
    /// Always notifies: the view may change without the data changing.
    pub fn set_order_strategy(&self, strategy: OrderStrategy) {
        self.state().strategy = strategy;
        info!("event=order_strategy_set module=store status=ok strategy={strategy:?}");
        self.notify_observers();
    }

    /// Returns the currently active display strategy.
    pub fn order_strategy(&self) -> OrderStrategy {
        self.state().strategy
    }

    /// Returns the collection transformed by the active strategy.
    ///
    /// Read-only projection: canonical storage order is left untouched.
    pub fn ordered(&self) -> Vec<Task> {
        let state = self.state();
        state.strategy.apply(&state.tasks)
    }

    /// Number of live tasks, independent of display ordering.
    pub fn len(&self) -> usize {
        self.state().tasks.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.state().tasks.is_empty()
    }

    /// Captures an immutable deep copy of the current collection.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::capture(&self.state().tasks)
    }

    /// Replaces the live collection with fresh tasks matching `snapshot`.
    ///
    /// Restored tasks are new entities; any externally-held `TaskId`s from
    /// before the restore are stale afterwards.
    pub fn restore(&self, snapshot: &TaskSnapshot) {
        {
            let mut state = self.state();
            state.tasks = snapshot.materialize();
            info!(
                "event=store_restored module=store status=ok total={}",
                state.tasks.len()
            );
        }
        self.notify_observers();
    }
}
