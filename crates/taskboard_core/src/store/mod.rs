//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for tasks.
//! - Isolate collection bookkeeping from service/business orchestration.
//!
//! # Invariants
//! - Store writes defensively reject drafts with empty trimmed titles.
//! - Store APIs return semantic errors (`NotFound`) instead of panicking.

pub mod memory;

pub use memory::{MemoryTaskStore, StoreError, StoreResult, TaskStore};
