//! Shared fixtures for ui tests.

use crate::board::domain::{PersistedTaskData, SortOrder, Task, TaskId, TaskStatus, TaskTitle};
use crate::ui::layout::{BoardLayout, ColumnLayout, Point, Rect, RowLayout};
use chrono::{DateTime, Duration, Utc};

/// Width of a fixture column in pixels.
pub const COLUMN_WIDTH: i32 = 200;
/// Height of a fixture task row in pixels.
pub const ROW_HEIGHT: i32 = 80;
/// Height of a fixture column in pixels.
pub const COLUMN_HEIGHT: i32 = 600;

/// Builds a three-column layout; `rows` lists each column's task ids in
/// rendered order, stacked from the column top.
pub fn board_layout(rows: [&[TaskId]; 3]) -> BoardLayout {
    let columns = TaskStatus::COLUMNS
        .iter()
        .zip(rows)
        .enumerate()
        .map(|(column_index, (status, ids))| {
            let left = COLUMN_WIDTH * i32::try_from(column_index).unwrap_or(0);
            ColumnLayout {
                status: *status,
                bounds: Rect::new(left, 0, COLUMN_WIDTH, COLUMN_HEIGHT),
                rows: ids
                    .iter()
                    .enumerate()
                    .map(|(row_index, id)| RowLayout {
                        task_id: *id,
                        bounds: Rect::new(
                            left,
                            ROW_HEIGHT * i32::try_from(row_index).unwrap_or(0),
                            COLUMN_WIDTH,
                            ROW_HEIGHT,
                        ),
                    })
                    .collect(),
            }
        })
        .collect();
    BoardLayout { columns }
}

/// Returns a point near the top-left of the given row.
pub const fn row_press_point(column_index: i32, row_index: i32) -> Point {
    Point::new(column_index * COLUMN_WIDTH + 10, row_index * ROW_HEIGHT + 10)
}

/// Returns a point inside the given column, below every stacked row.
pub const fn column_tail_point(column_index: i32) -> Point {
    Point::new(column_index * COLUMN_WIDTH + 10, COLUMN_HEIGHT - 20)
}

/// Builds a task with fixed timestamps for deterministic ordering.
pub fn seeded_task(
    status: TaskStatus,
    position: i64,
    created_offset_minutes: i64,
) -> eyre::Result<Task> {
    let base: DateTime<Utc> = "2026-05-10T08:00:00Z".parse()?;
    let created_at = base + Duration::minutes(created_offset_minutes);
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new("Seeded")?,
        description: String::new(),
        status,
        sort_order: SortOrder::new(position)?,
        created_at,
        updated_at: created_at,
    }))
}
