//! Repository port for task persistence and order queries.

use crate::board::domain::{SortOrder, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (fields, status, position,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists a batch of task updates as one atomic write.
    ///
    /// Backs bulk reorders: either every given task commits or none do, and
    /// a concurrent reader never observes a half-renumbered column. Tasks
    /// whose id no longer exists are skipped silently; the batch still
    /// succeeds.
    async fn update_many(&self, tasks: &[Task]) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task by identifier.
    ///
    /// Returns `false` when no task with the id existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns every task in canonical read order: columns in board display
    /// order, then `sort_order` ascending, then `created_at` descending.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the highest position currently used in a status column.
    ///
    /// Returns `None` when the column is empty.
    async fn max_sort_order(&self, status: TaskStatus) -> TaskRepositoryResult<Option<SortOrder>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
