//! Task use-case service.
//!
//! # Responsibility
//! - Validate UI input above the repository layer.
//! - Provide the bulk-import path used by OCR/drag-and-drop callers.
//!
//! # Invariants
//! - Blank content never reaches storage.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::task::{Task, TaskId, TaskStatus};
use crate::model::task_tree::TaskTree;
use crate::repo::task_repo::{RepoError, TaskListQuery, TaskRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task service operations.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Content is empty or all-whitespace.
    EmptyContent,
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "task content must not be blank"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one task, optionally nested under a parent.
    ///
    /// Blank or whitespace-only content is rejected before any insert.
    pub fn add(
        &self,
        content: &str,
        parent_id: Option<TaskId>,
    ) -> Result<Task, TaskServiceError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(TaskServiceError::EmptyContent);
        }
        self.repo.create(trimmed, parent_id).map_err(Into::into)
    }

    /// Creates one task per non-blank line of `blob`.
    ///
    /// Returns the number of tasks actually created. This is the bulk-import
    /// path fed by the OCR result panel and drag-and-drop text.
    pub fn add_from_text(
        &self,
        blob: &str,
        parent_id: Option<TaskId>,
    ) -> Result<usize, TaskServiceError> {
        let mut created = 0;
        for line in blob.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.repo.create(trimmed, parent_id)?;
            created += 1;
        }
        Ok(created)
    }

    /// Lists tasks in tree-rendering order.
    pub fn list(
        &self,
        status: Option<TaskStatus>,
        include_archived: bool,
    ) -> Result<Vec<Task>, TaskServiceError> {
        let query = TaskListQuery {
            status,
            include_archived,
        };
        self.repo.list(&query).map_err(Into::into)
    }

    /// Lists tasks and builds the explicit parent/child structure for the UI.
    pub fn list_tree(
        &self,
        status: Option<TaskStatus>,
        include_archived: bool,
    ) -> Result<TaskTree, TaskServiceError> {
        Ok(TaskTree::build(self.list(status, include_archived)?))
    }

    /// Sets one task's status.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<(), TaskServiceError> {
        let changed = self.repo.set_status_bulk(&[id], status)?;
        if changed == 0 {
            return Err(TaskServiceError::TaskNotFound(id));
        }
        Ok(())
    }

    /// Sets the status of every given id. Returns the changed row count;
    /// an empty id list is a no-op returning 0.
    pub fn set_status_bulk(
        &self,
        ids: &[TaskId],
        status: TaskStatus,
    ) -> Result<usize, TaskServiceError> {
        self.repo.set_status_bulk(ids, status).map_err(Into::into)
    }

    /// Deletes one task and its descendants.
    pub fn delete(&self, id: TaskId) -> Result<(), TaskServiceError> {
        let removed = self.repo.delete_bulk(&[id])?;
        if removed == 0 {
            return Err(TaskServiceError::TaskNotFound(id));
        }
        Ok(())
    }

    /// Deletes every given id and all descendants. Returns the removed count.
    pub fn delete_bulk(&self, ids: &[TaskId]) -> Result<usize, TaskServiceError> {
        self.repo.delete_bulk(ids).map_err(Into::into)
    }

    /// Rewrites one sibling scope's display order to match `ordered_ids`.
    pub fn reorder(
        &self,
        parent_id: Option<TaskId>,
        ordered_ids: &[TaskId],
    ) -> Result<(), TaskServiceError> {
        self.repo.reorder(parent_id, ordered_ids).map_err(Into::into)
    }

    /// Archives completed tasks created more than `days` days ago.
    /// Returns the number of newly archived tasks.
    pub fn archive_completed_older_than(&self, days: i64) -> Result<usize, TaskServiceError> {
        self.repo.archive_stale_completed(days).map_err(Into::into)
    }
}
