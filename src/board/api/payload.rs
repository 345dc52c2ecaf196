//! Wire payloads accepted by the board's write endpoints.
//!
//! Status fields arrive as raw strings and pass through the shared
//! [`TaskStatus::from_input`](crate::board::domain::TaskStatus::from_input)
//! coercion in the handlers; payloads stay permissive so a missing field is
//! a validation message, not a deserialisation failure.

use crate::board::domain::TaskId;
use serde::Deserialize;

/// Body of a create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskPayload {
    /// Task title; required, must be non-blank.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Destination column label; unrecognised values coerce to `To Do`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of a partial update request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskPayload {
    /// Task identifier; required.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Replacement title; blank values are ignored.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Destination column label; unrecognised values are ignored.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of a delete request.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTaskPayload {
    /// Task identifier; required.
    #[serde(default)]
    pub id: Option<TaskId>,
}

/// Body of a bulk reorder request.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderPayload {
    /// Ordered id sequence; required, must be non-empty.
    #[serde(default, rename = "taskIds")]
    pub task_ids: Vec<TaskId>,
    /// Optional destination column for every listed task.
    #[serde(default)]
    pub status: Option<String>,
}
