//! Uniform response envelope returned by every board endpoint.

use crate::board::domain::Task;
use serde::{Deserialize, Serialize};

/// Response envelope: `{success, message?, task?, tasks?}`.
///
/// Failures ride the same envelope with `success: false` and a
/// human-readable message; transport status codes stay out of scope.
/// Absent fields are omitted from the serialised JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The affected task, when a single record is returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// The board listing, for read endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl ApiResponse {
    /// Success carrying a single affected task.
    #[must_use]
    pub fn ok_task(message: impl Into<String>, task: Task) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            task: Some(task),
            tasks: None,
        }
    }

    /// Success carrying the board listing.
    #[must_use]
    pub const fn ok_tasks(tasks: Vec<Task>) -> Self {
        Self {
            success: true,
            message: None,
            task: None,
            tasks: Some(tasks),
        }
    }

    /// Success carrying only a message.
    #[must_use]
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            task: None,
            tasks: None,
        }
    }

    /// Failure carrying a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            task: None,
            tasks: None,
        }
    }
}
