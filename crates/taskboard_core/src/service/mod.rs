//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate form parsing, store calls and projections into the
//!   use-case level API the presentation layer calls into.
//! - Keep callers decoupled from store implementation details.

pub mod task_service;

pub use task_service::{ServiceError, TaskService};
