//! Filtered, sorted, summarized views of a task snapshot.
//!
//! Everything here is a pure function: the store hands in its snapshot, the
//! caller hands in its currently selected view options, and the result is
//! recomputed fresh on every call. The collection is small, so there is no
//! incremental caching.

use crate::model::task::{Task, TaskStatus};
use std::cmp::Ordering;

/// Status filter selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Retain every task.
    #[default]
    All,
    /// Retain only tasks with exactly this status.
    Only(TaskStatus),
}

/// Sort key for the projected list. Due date is the only key today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DueDate,
}

/// Caller-owned view parameters.
///
/// `completed_only` models the dedicated completed-tasks view: when set, the
/// independent `filter` is suppressed entirely rather than combined with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub filter: StatusFilter,
    pub completed_only: bool,
    pub sort: SortKey,
}

impl ViewOptions {
    /// Options for the completed-only view mode.
    pub fn completed_only() -> Self {
        Self {
            completed_only: true,
            ..Self::default()
        }
    }
}

/// Per-status counts over the full snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

/// A projected list together with the whole-board summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub tasks: Vec<Task>,
    pub summary: Summary,
}

/// Filters and sorts a snapshot according to `options`.
///
/// Sorting is stable: tasks without a due date keep their relative order and
/// sort after every task that has one.
pub fn project(snapshot: &[Task], options: &ViewOptions) -> Vec<Task> {
    let mut tasks: Vec<Task> = snapshot
        .iter()
        .filter(|task| retain(task, options))
        .cloned()
        .collect();

    match options.sort {
        SortKey::DueDate => tasks.sort_by(|a, b| compare_due_dates(a, b)),
    }

    tasks
}

/// Counts tasks per status over the unfiltered snapshot.
pub fn summarize(snapshot: &[Task]) -> Summary {
    let mut summary = Summary {
        total: snapshot.len(),
        ..Summary::default()
    };
    for task in snapshot {
        match task.status {
            TaskStatus::Pending => summary.pending += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => summary.completed += 1,
        }
    }
    summary
}

/// Composes `project` and `summarize` over the same snapshot.
pub fn dashboard(snapshot: &[Task], options: &ViewOptions) -> DashboardView {
    DashboardView {
        tasks: project(snapshot, options),
        summary: summarize(snapshot),
    }
}

fn retain(task: &Task, options: &ViewOptions) -> bool {
    // Completed-only mode and the status filter are mutually exclusive views.
    if options.completed_only {
        return task.status == TaskStatus::Completed;
    }
    match options.filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => task.status == status,
    }
}

fn compare_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
