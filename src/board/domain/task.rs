//! Task aggregate root and mutation rules.

use super::{SortOrder, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task lives in exactly one status column and carries the sort position
/// that orders it within that column. Every mutation refreshes `updated_at`
/// from the supplied clock; `created_at` is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    sort_order: SortOrder,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, possibly empty.
    pub description: String,
    /// Persisted status column.
    pub status: TaskStatus,
    /// Persisted column position.
    pub sort_order: SortOrder,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task at the given column position.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: String,
        status: TaskStatus,
        position: SortOrder,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description,
            status,
            sort_order: position,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            sort_order: data.sort_order,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status column the task belongs to.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task's position within its column.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: String, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Moves the task to a status column at the given position.
    ///
    /// Same-column moves keep whatever position the caller supplies; a
    /// caller refreshing only the status field passes the current position.
    pub fn move_to(&mut self, status: TaskStatus, position: SortOrder, clock: &impl Clock) {
        self.status = status;
        self.sort_order = position;
        self.touch(clock);
    }

    /// Assigns a new column position without changing status.
    pub fn place_at(&mut self, position: SortOrder, clock: &impl Clock) {
        self.sort_order = position;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
