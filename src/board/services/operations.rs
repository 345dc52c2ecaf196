//! Service layer orchestrating board operations.

use crate::board::{
    domain::{BoardDomainError, Task, TaskId, TaskStatus, TaskTitle},
    ordering,
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request with the given title, an empty description, and
    /// the `To Do` column as destination.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::ToDo,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the destination column.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Request payload for a partial task update.
///
/// Absent fields are left untouched. Callers at the API boundary drop
/// invalid fields (blank title, unrecognised status) before building the
/// request, per the board's ignore-not-error update semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<TaskTitle>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            status: None,
        }
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a destination column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Request payload for a bulk reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRequest {
    task_ids: Vec<TaskId>,
    status: Option<TaskStatus>,
}

impl ReorderRequest {
    /// Creates a reorder over the given id sequence, positions following
    /// sequence order.
    #[must_use]
    pub const fn new(task_ids: Vec<TaskId>) -> Self {
        Self {
            task_ids,
            status: None,
        }
    }

    /// Also relocates every listed task to the given column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// An update carried no applicable fields.
    #[error("no valid fields to update")]
    EmptyUpdate,
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the whole board in canonical read order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn list_board(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Creates a task appended to the end of its status column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is empty after
    /// trimming, or [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request.description.trim().to_owned();
        let current_max = self.repository.max_sort_order(request.status).await?;
        let position = ordering::append_position(current_max);
        let task = Task::new(title, description, request.status, position, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// A status change appends the task to the end of its destination
    /// column; a same-column status write keeps the current position.
    /// Updating other fields never moves the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::EmptyUpdate`] when no field is set,
    /// [`TaskBoardError::TaskNotFound`] when the id does not resolve, or
    /// [`TaskBoardError::Repository`] when persistence fails.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskBoardResult<Task> {
        if request.is_empty() {
            return Err(TaskBoardError::EmptyUpdate);
        }
        let mut task = self
            .repository
            .find_by_id(request.id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(request.id))?;

        if let Some(new_title) = request.title {
            task.rename(new_title, &*self.clock);
        }
        if let Some(new_description) = request.description {
            task.describe(new_description.trim().to_owned(), &*self.clock);
        }
        if let Some(new_status) = request.status {
            let position = if new_status == task.status() {
                task.sort_order()
            } else {
                ordering::append_position(self.repository.max_sort_order(new_status).await?)
            };
            task.move_to(new_status, position, &*self.clock);
        }

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::TaskNotFound`] when the id does not
    /// resolve, or [`TaskBoardError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(TaskBoardError::TaskNotFound(id))
        }
    }

    /// Applies a bulk reorder: positions follow the id sequence, and every
    /// listed task relocates to the target column when one is given.
    ///
    /// Unknown ids are skipped (ordering is best-effort per id), duplicate
    /// ids resolve last-occurrence-wins, and an empty sequence is a
    /// successful no-op. The batch persists atomically: a concurrent reader
    /// never observes a half-renumbered column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when loading or persisting
    /// fails; nothing commits in that case.
    pub async fn reorder_tasks(&self, request: ReorderRequest) -> TaskBoardResult<()> {
        let placements = ordering::sequence_placements(&request.task_ids);
        let mut staged: HashMap<TaskId, Task> = HashMap::new();
        for placement in placements {
            if !staged.contains_key(&placement.task_id) {
                let Some(found) = self.repository.find_by_id(placement.task_id).await? else {
                    continue;
                };
                staged.insert(placement.task_id, found);
            }
            if let Some(entry) = staged.get_mut(&placement.task_id) {
                match request.status {
                    Some(new_status) => {
                        entry.move_to(new_status, placement.position, &*self.clock);
                    }
                    None => entry.place_at(placement.position, &*self.clock),
                }
            }
        }
        if staged.is_empty() {
            return Ok(());
        }
        let batch: Vec<Task> = staged.into_values().collect();
        self.repository.update_many(&batch).await?;
        Ok(())
    }
}
