//! Endpoint handlers translating raw JSON bodies into board operations.

use super::payload::{CreateTaskPayload, DeleteTaskPayload, ReorderPayload, UpdateTaskPayload};
use super::response::ApiResponse;
use crate::board::domain::{TaskStatus, TaskTitle};
use crate::board::ports::TaskRepository;
use crate::board::services::{
    CreateTaskRequest, ReorderRequest, TaskBoardError, TaskBoardService, UpdateTaskRequest,
};
use mockable::Clock;
use serde::de::DeserializeOwned;
use tracing::error;

/// Message returned for any unparseable request body.
const INVALID_JSON: &str = "Invalid JSON input";

/// JSON boundary over [`TaskBoardService`].
///
/// One handler per endpoint; each takes the raw request body, applies the
/// board's validation and coercion rules, and answers with the uniform
/// envelope. Storage failures are logged here and reported generically.
#[derive(Clone)]
pub struct TaskBoardApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskBoardService<R, C>,
}

impl<R, C> TaskBoardApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the boundary over a board service.
    #[must_use]
    pub const fn new(service: TaskBoardService<R, C>) -> Self {
        Self { service }
    }

    /// `GET /tasks` — the whole board in canonical read order.
    pub async fn list_tasks(&self) -> ApiResponse {
        match self.service.list_board().await {
            Ok(board) => ApiResponse::ok_tasks(board),
            Err(err) => storage_failure("list tasks", &err, "Internal server error"),
        }
    }

    /// `POST /tasks` — create a task.
    ///
    /// The title is required and must be non-blank; an unrecognised status
    /// coerces to `To Do`.
    pub async fn create_task(&self, body: &str) -> ApiResponse {
        let payload: CreateTaskPayload = match parse_body(body) {
            Ok(parsed) => parsed,
            Err(response) => return response,
        };
        let Some(title) = payload.title.filter(|value| !value.trim().is_empty()) else {
            return ApiResponse::failure("Title is required");
        };
        let status = payload
            .status
            .as_deref()
            .and_then(TaskStatus::from_input)
            .unwrap_or(TaskStatus::ToDo);
        let mut request = CreateTaskRequest::new(title).with_status(status);
        if let Some(description) = payload.description {
            request = request.with_description(description);
        }
        match self.service.create_task(request).await {
            Ok(task) => ApiResponse::ok_task("Task created successfully", task),
            Err(TaskBoardError::Domain(_)) => ApiResponse::failure("Title is required"),
            Err(err) => storage_failure("create task", &err, "Failed to create task"),
        }
    }

    /// `PUT /tasks` — partial update.
    ///
    /// The id is required. A blank title or unrecognised status is dropped
    /// rather than rejected; remaining valid fields still apply, and an
    /// update with none left is an error.
    pub async fn update_task(&self, body: &str) -> ApiResponse {
        let payload: UpdateTaskPayload = match parse_body(body) {
            Ok(parsed) => parsed,
            Err(response) => return response,
        };
        let Some(id) = payload.id else {
            return ApiResponse::failure("Task ID is required");
        };
        let mut request = UpdateTaskRequest::new(id);
        if let Some(new_title) = payload.title.and_then(|value| TaskTitle::new(value).ok()) {
            request = request.with_title(new_title);
        }
        if let Some(new_description) = payload.description {
            request = request.with_description(new_description);
        }
        if let Some(new_status) = payload.status.as_deref().and_then(TaskStatus::from_input) {
            request = request.with_status(new_status);
        }
        match self.service.update_task(request).await {
            Ok(task) => ApiResponse::ok_task("Task updated successfully", task),
            Err(TaskBoardError::EmptyUpdate) => ApiResponse::failure("No valid fields to update"),
            Err(TaskBoardError::TaskNotFound(_)) => ApiResponse::failure("Task not found"),
            Err(err) => storage_failure("update task", &err, "Failed to update task"),
        }
    }

    /// `DELETE /tasks` — delete a task.
    pub async fn delete_task(&self, body: &str) -> ApiResponse {
        let payload: DeleteTaskPayload = match parse_body(body) {
            Ok(parsed) => parsed,
            Err(response) => return response,
        };
        let Some(id) = payload.id else {
            return ApiResponse::failure("Task ID is required");
        };
        match self.service.delete_task(id).await {
            Ok(()) => ApiResponse::ok_message("Task deleted successfully"),
            Err(TaskBoardError::TaskNotFound(_)) => ApiResponse::failure("Task not found"),
            Err(err) => storage_failure("delete task", &err, "Failed to delete task"),
        }
    }

    /// `POST /tasks/reorder` — bulk reorder.
    ///
    /// Positions follow the id sequence; an unrecognised status is treated
    /// as omitted, so positions still apply without relocation.
    pub async fn reorder_tasks(&self, body: &str) -> ApiResponse {
        let payload: ReorderPayload = match parse_body(body) {
            Ok(parsed) => parsed,
            Err(response) => return response,
        };
        if payload.task_ids.is_empty() {
            return ApiResponse::failure("Task IDs array is required");
        }
        let mut request = ReorderRequest::new(payload.task_ids);
        if let Some(target) = payload.status.as_deref().and_then(TaskStatus::from_input) {
            request = request.with_status(target);
        }
        match self.service.reorder_tasks(request).await {
            Ok(()) => ApiResponse::ok_message("Tasks reordered successfully"),
            Err(err) => storage_failure("reorder tasks", &err, "Failed to reorder tasks"),
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiResponse> {
    serde_json::from_str(body).map_err(|_| ApiResponse::failure(INVALID_JSON))
}

/// Logs the internal cause and answers with a generic message.
fn storage_failure(operation: &str, cause: &TaskBoardError, message: &str) -> ApiResponse {
    error!(operation, error = %cause, "board operation failed");
    ApiResponse::failure(message)
}
