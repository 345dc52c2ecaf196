//! Immutable board snapshots grouped for rendering.

use crate::board::domain::{Task, TaskId, TaskStatus};
use crate::board::ordering;

/// One rendered column: a status and its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl ColumnView {
    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column's tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column, for the header counter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column has no tasks (renders the empty state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the column's task ids in display order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }
}

/// Immutable snapshot of the whole board, grouped and sorted for rendering.
///
/// A snapshot is rebuilt from a fresh fetch after every mutation; nothing
/// mutates one in place, so the rendered DOM can never race a stale list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    columns: Vec<ColumnView>,
}

impl BoardSnapshot {
    /// Builds a snapshot from fetched tasks.
    ///
    /// Tasks are grouped into the three columns in board display order and
    /// sorted within each column by position, newest first on ties. Input
    /// order does not matter.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut columns: Vec<ColumnView> = TaskStatus::COLUMNS
            .iter()
            .map(|status| ColumnView {
                status: *status,
                tasks: Vec::new(),
            })
            .collect();
        for task in tasks {
            if let Some(column) = columns
                .iter_mut()
                .find(|candidate| candidate.status == task.status())
            {
                column.tasks.push(task);
            }
        }
        for column in &mut columns {
            column.tasks.sort_by(ordering::column_ordering);
        }
        Self { columns }
    }

    /// Returns the columns in board display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnView] {
        &self.columns
    }

    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Looks a task up by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .find(|task| task.id() == id)
    }
}
