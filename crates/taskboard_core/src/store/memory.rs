//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical task collection.
//! - Generate fresh identifiers that are never reused within a store's
//!   lifetime, including across delete/re-add cycles.
//!
//! # Invariants
//! - `list` returns tasks in insertion order; updates keep position.
//! - The collection lives for the process lifetime only; there is no
//!   persistence and no tombstone/undo for removed tasks.

use crate::model::task::{Task, TaskDraft, TaskId, TaskValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for task CRUD operations.
///
/// The board is single-actor and synchronous, so mutators take `&mut self`
/// and every call runs to completion before the next one starts.
pub trait TaskStore {
    /// Returns the full snapshot in insertion order, no filtering.
    fn list(&self) -> &[Task];

    /// Point lookup by stable id.
    fn get(&self, id: TaskId) -> Option<&Task>;

    /// Materializes a draft into a stored task with a fresh unique id.
    fn add(&mut self, draft: TaskDraft) -> StoreResult<Task>;

    /// Replaces every mutable field of the task matching `id` wholesale.
    /// The id and iteration position are preserved.
    fn update(&mut self, id: TaskId, draft: TaskDraft) -> StoreResult<Task>;

    /// Removes the task matching `id` irreversibly and returns it.
    fn remove(&mut self, id: TaskId) -> StoreResult<Task>;
}

/// Canonical in-memory task store backed by an insertion-ordered vector.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for MemoryTaskStore {
    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn add(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        let task = materialize(Uuid::new_v4(), draft)?;
        debug!(
            "event=task_added module=store id={} status={:?}",
            task.id, task.status
        );
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&mut self, id: TaskId, draft: TaskDraft) -> StoreResult<Task> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let task = materialize(id, draft)?;
        debug!(
            "event=task_updated module=store id={} status={:?}",
            task.id, task.status
        );
        self.tasks[index] = task.clone();
        Ok(task)
    }

    fn remove(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let task = self.tasks.remove(index);
        debug!("event=task_removed module=store id={}", task.id);
        Ok(task)
    }
}

/// Converts a draft into a stored record under a given id.
///
/// Defensive check only: the title rule is enforced here even though the
/// form layer validates first. Due dates are not re-checked against a clock;
/// they were validated at submission time.
fn materialize(id: TaskId, draft: TaskDraft) -> StoreResult<Task> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(TaskValidationError::EmptyTitle.into());
    }

    Ok(Task {
        id,
        title: title.to_string(),
        description: normalize_description(draft.description),
        status: draft.status.unwrap_or_default(),
        due_date: draft.due_date,
    })
}

fn normalize_description(description: Option<String>) -> Option<String> {
    let text = description?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
