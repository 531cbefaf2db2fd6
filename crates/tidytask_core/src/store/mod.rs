//! Authoritative task storage and change notification.
//!
//! # Responsibility
//! - Own the canonical task collection and the active display ordering.
//! - Emit change notifications after every state-affecting operation.
//!
//! # Invariants
//! - All mutations are serialized behind one lock; callers observe a total
//!   order with no torn reads of the ordered view.
//! - Observers are never invoked while the collection lock is held.

pub mod task_store;
