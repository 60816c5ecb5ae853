//! Create/edit submission parsing and validation.
//!
//! # Responsibility
//! - Turn the raw string payload a form surface submits into a validated
//!   `TaskDraft`, before any store mutation happens.
//! - Report failures per field so callers can render field-level messages.
//!
//! # Invariants
//! - A submission that parses successfully never fails the store's own
//!   defensive title check.
//! - `today` is supplied by the caller; parsing never reads the clock.

use crate::model::task::{TaskDraft, TaskStatus, TaskValidationError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw create/edit payload as submitted by the surrounding UI.
///
/// All fields arrive as strings; `status` and `due_date` are parsed here.
/// An empty `status` defaults to pending, matching the form's initial state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskSubmission {
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_date: String,
}

/// Field-level submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Title is empty after trimming.
    TitleRequired,
    /// Due date field was left empty. Required at this boundary even though
    /// the draft itself allows absent due dates.
    DueDateRequired,
    /// Due date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDueDate(String),
    /// Due date parsed but lies before the current date.
    DueDateInPast {
        due_date: NaiveDate,
        today: NaiveDate,
    },
    /// Status string matches neither the wire names nor the UI labels.
    UnknownStatus(String),
}

impl FormError {
    /// Stable field name the error should be attached to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TitleRequired => "title",
            Self::DueDateRequired | Self::InvalidDueDate(_) | Self::DueDateInPast { .. } => {
                "due_date"
            }
            Self::UnknownStatus(_) => "status",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title is required"),
            Self::DueDateRequired => write!(f, "due date is required"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
            Self::DueDateInPast { due_date, today } => {
                write!(f, "due date {due_date} cannot be in the past (today is {today})")
            }
            Self::UnknownStatus(value) => write!(f, "unknown status `{value}`"),
        }
    }
}

impl Error for FormError {}

impl From<TaskValidationError> for FormError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::EmptyTitle => Self::TitleRequired,
            TaskValidationError::DueDateInPast { due_date, today } => {
                Self::DueDateInPast { due_date, today }
            }
        }
    }
}

/// Parses and validates a raw submission into a draft.
///
/// # Contract
/// - Title must be non-empty after trimming.
/// - Due date is required, must parse as `YYYY-MM-DD` and be >= `today`.
/// - Description is optional; whitespace-only input becomes `None`.
pub fn parse_submission(
    submission: &TaskSubmission,
    today: NaiveDate,
) -> Result<TaskDraft, FormError> {
    let title = submission.title.trim();
    if title.is_empty() {
        return Err(FormError::TitleRequired);
    }

    let status = parse_status(&submission.status)?;
    let due_date = parse_due_date(&submission.due_date)?;

    let draft = TaskDraft {
        title: title.to_string(),
        description: non_empty(&submission.description),
        status: Some(status),
        due_date: Some(due_date),
    };
    draft.validate(today)?;
    Ok(draft)
}

fn parse_due_date(value: &str) -> Result<NaiveDate, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::DueDateRequired);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDueDate(trimmed.to_string()))
}

/// Accepts both wire names (`in_progress`) and UI labels (`In Progress`).
fn parse_status(value: &str) -> Result<TaskStatus, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(TaskStatus::Pending);
    }
    for status in TaskStatus::ALL {
        if trimmed.eq_ignore_ascii_case(status.label()) {
            return Ok(status);
        }
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        _ => Err(FormError::UnknownStatus(trimmed.to_string())),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
