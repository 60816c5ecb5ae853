//! Core domain logic for the task board.
//! This crate is the single source of truth for business invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use form::{parse_submission, FormError, TaskSubmission};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskDraft, TaskId, TaskStatus, TaskValidationError};
pub use service::{ServiceError, TaskService};
pub use store::{MemoryTaskStore, StoreError, StoreResult, TaskStore};
pub use view::{
    dashboard, project, summarize, DashboardView, SortKey, StatusFilter, Summary, ViewOptions,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
