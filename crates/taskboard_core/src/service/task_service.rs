//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable create/edit/delete/view entry points for core callers.
//! - Delegate collection bookkeeping to the store implementation.
//!
//! # Invariants
//! - Service APIs never bypass form validation before store mutations.
//! - A missing id on edit/delete is absorbed as a logged no-op: the ids the
//!   caller holds come from an earlier snapshot, so a stale row is not an
//!   error worth failing the interaction over.

use crate::form::{parse_submission, FormError, TaskSubmission};
use crate::model::task::{Task, TaskId};
use crate::store::{StoreError, TaskStore};
use crate::view::{dashboard, DashboardView, ViewOptions};
use chrono::NaiveDate;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surfaced by service entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Form(FormError),
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper around a task store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task from a raw form submission.
    ///
    /// # Contract
    /// - The submission is parsed and validated against `today` first; the
    ///   store is untouched when validation fails.
    /// - Returns the stored task with its freshly assigned id.
    pub fn create(
        &mut self,
        submission: &TaskSubmission,
        today: NaiveDate,
    ) -> Result<Task, ServiceError> {
        let draft = parse_submission(submission, today)?;
        Ok(self.store.add(draft)?)
    }

    /// Replaces the fields of an existing task from a raw form submission.
    ///
    /// Returns `Ok(None)` when `id` no longer exists: the row the caller
    /// edited was deleted in the meantime, which is logged but not fatal.
    pub fn edit(
        &mut self,
        id: TaskId,
        submission: &TaskSubmission,
        today: NaiveDate,
    ) -> Result<Option<Task>, ServiceError> {
        let draft = parse_submission(submission, today)?;
        match self.store.update(id, draft) {
            Ok(task) => Ok(Some(task)),
            Err(StoreError::NotFound(id)) => {
                warn!("event=edit_missing_task module=service id={id}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a task by id, returning whether anything was removed.
    ///
    /// The caller is expected to have confirmed the deletion with the user
    /// before invoking this; there is no undo.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.store.remove(id) {
            Ok(_) => true,
            Err(StoreError::NotFound(id)) => {
                warn!("event=delete_missing_task module=service id={id}");
                false
            }
            Err(err) => {
                warn!("event=delete_failed module=service id={id} error={err}");
                false
            }
        }
    }

    /// Derives the dashboard view for the caller's current options.
    pub fn dashboard(&self, options: &ViewOptions) -> DashboardView {
        dashboard(self.store.list(), options)
    }

    /// Raw unfiltered snapshot in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    /// Point lookup used to prefill the edit form.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }
}
