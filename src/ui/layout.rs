//! Integer pixel geometry for board hit-testing.
//!
//! Mirrors the bounding boxes the renderer reports for columns and task
//! rows. Coordinates are device pixels; the midpoint comparison doubles
//! both sides instead of halving, keeping the math in integers.

use crate::board::domain::{TaskId, TaskStatus};

/// Pointer position in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Returns whether the point falls inside the box.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Returns whether the pointer lies above the box's vertical midpoint.
    #[must_use]
    pub fn pointer_above_midpoint(&self, y: i32) -> bool {
        i64::from(y) * 2 < i64::from(self.top) * 2 + i64::from(self.height)
    }
}

/// Rendered bounds of one task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Task rendered in the row.
    pub task_id: TaskId,
    /// Row bounding box.
    pub bounds: Rect,
}

/// Rendered bounds of one status column and its task rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column status.
    pub status: TaskStatus,
    /// Column bounding box, including the empty space below the last row.
    pub bounds: Rect,
    /// Task rows in rendered (display) order.
    pub rows: Vec<RowLayout>,
}

impl ColumnLayout {
    /// Returns the insertion index for a pointer position.
    ///
    /// Walks the visible rows, skipping the dragged task; the first row
    /// whose vertical midpoint lies below the pointer is the anchor, and
    /// the dragged task inserts before it. No such row inserts at the end.
    #[must_use]
    pub fn insertion_index(&self, pointer: Point, dragged: TaskId) -> usize {
        let visible: Vec<&RowLayout> = self
            .rows
            .iter()
            .filter(|row| row.task_id != dragged)
            .collect();
        let end = visible.len();
        visible
            .iter()
            .position(|row| row.bounds.pointer_above_midpoint(pointer.y))
            .unwrap_or(end)
    }

    /// Returns the column's final id sequence with the dragged task at the
    /// given visible index.
    #[must_use]
    pub fn sequence_with(&self, dragged: TaskId, index: usize) -> Vec<TaskId> {
        let mut sequence: Vec<TaskId> = self
            .rows
            .iter()
            .map(|row| row.task_id)
            .filter(|id| *id != dragged)
            .collect();
        let slot = index.min(sequence.len());
        sequence.insert(slot, dragged);
        sequence
    }

    /// Returns the row containing the pointer, if any.
    #[must_use]
    pub fn row_at(&self, pointer: Point) -> Option<&RowLayout> {
        self.rows.iter().find(|row| row.bounds.contains(pointer))
    }
}

/// Rendered bounds of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// Columns in rendered order.
    pub columns: Vec<ColumnLayout>,
}

impl BoardLayout {
    /// Returns the column under the pointer, if any.
    #[must_use]
    pub fn column_at(&self, pointer: Point) -> Option<&ColumnLayout> {
        self.columns
            .iter()
            .find(|column| column.bounds.contains(pointer))
    }

    /// Returns the task row under the pointer with its column's status.
    #[must_use]
    pub fn row_at(&self, pointer: Point) -> Option<(TaskStatus, &RowLayout)> {
        self.column_at(pointer)
            .and_then(|column| column.row_at(pointer).map(|row| (column.status, row)))
    }
}
