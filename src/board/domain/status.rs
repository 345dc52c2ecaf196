//! Task status enumeration and shared input coercion.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task belongs to.
///
/// Variant order is the board's column display order and defines the
/// grouping order of every listing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work not yet started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work finished.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Board columns in display order.
    pub const COLUMNS: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the canonical storage and wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Interprets a raw status value from a write request.
    ///
    /// This is the single coercion point shared by every write path.
    /// Matching is case-insensitive on the canonical labels; `None` signals
    /// an unrecognised value, which callers default to [`Self::ToDo`] on
    /// create and ignore on update.
    #[must_use]
    pub fn from_input(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to do" => Some(Self::ToDo),
            "in progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_input(value).ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
