//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record stored by the board.
//! - Define the draft shape used for create/edit submissions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after trimming for any task accepted into a store.
//! - `due_date`, when present, was not in the past at the moment it was set;
//!   nothing revalidates it on read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started. The default for new tasks.
    Pending,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Completed,
}

impl TaskStatus {
    /// All states in lifecycle order, for filter pickers and iteration.
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Human-facing label as shown by the surrounding UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Canonical task record.
///
/// All fields except `id` are replaced wholesale on edit; `id` is assigned
/// once by the store and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier assigned at creation.
    pub id: TaskId,
    /// Non-empty trimmed title.
    pub title: String,
    /// Optional free-form body. Empty input is normalized to `None`.
    pub description: Option<String>,
    /// Lifecycle state.
    pub status: TaskStatus,
    /// Optional calendar due date, no time component.
    pub due_date: Option<NaiveDate>,
}

/// Validated field set for creating or editing a task.
///
/// A draft carries no identity; the store assigns `TaskId` on add and
/// preserves it on update. `status` defaults to `Pending` when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the given title and everything else unset.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Checks draft invariants against the caller-supplied current date.
    ///
    /// # Contract
    /// - Title must be non-empty after trimming.
    /// - A due date, when present, must be `today` or later.
    /// - `today` is passed in by the caller so validation stays a pure
    ///   function of its inputs.
    pub fn validate(&self, today: NaiveDate) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if let Some(due_date) = self.due_date {
            if due_date < today {
                return Err(TaskValidationError::DueDateInPast { due_date, today });
            }
        }
        Ok(())
    }
}

/// Field-level validation failure for a task draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Due date is earlier than the current date it was checked against.
    DueDateInPast {
        due_date: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::DueDateInPast { due_date, today } => {
                write!(f, "due date {due_date} is earlier than today {today}")
            }
        }
    }
}

impl Error for TaskValidationError {}
