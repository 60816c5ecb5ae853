//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the canonical `Task` record and its lifecycle states.
//! - Hold field-level validation rules shared by the form and store layers.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - An accepted task always has a non-empty trimmed title.

pub mod task;
