//! Pure ordering rules for column positions.
//!
//! The ordering engine computes every `sort_order` assignment the board
//! makes: append positions for newly created tasks and for tasks changing
//! column, 1-based position sequences for bulk reorders, and the canonical
//! comparator every listing surface sorts with. Nothing here performs I/O;
//! callers query the store for the inputs and persist the results.

use super::domain::{SortOrder, Task, TaskId};
use std::cmp::Ordering;

/// One computed position assignment from a bulk reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Task receiving the position.
    pub task_id: TaskId,
    /// 1-based position within the target column.
    pub position: SortOrder,
}

/// Returns the append position for a column whose current maximum is known.
///
/// An empty column yields [`SortOrder::FIRST`]; otherwise the position
/// directly after the maximum. Used on create and when a status change
/// appends the task to the end of its destination column. The source
/// column keeps its gap; ordering is relative, not dense.
#[must_use]
pub fn append_position(current_max: Option<SortOrder>) -> SortOrder {
    current_max.map_or(SortOrder::FIRST, SortOrder::next)
}

/// Computes 1-based positions for an ordered id sequence.
///
/// Duplicate ids are kept as-is; applying the placements in order means the
/// last occurrence's position wins. An empty sequence yields an empty plan,
/// which downstream layers treat as a successful no-op.
#[must_use]
pub fn sequence_placements(task_ids: &[TaskId]) -> Vec<Placement> {
    task_ids
        .iter()
        .enumerate()
        .map(|(index, task_id)| Placement {
            task_id: *task_id,
            position: SortOrder::from_index(index),
        })
        .collect()
}

/// Within-column ordering: `sort_order` ascending, then newest first.
///
/// Positions are not guaranteed unique, so creation time breaks ties with
/// the most recently created task displayed first.
#[must_use]
pub fn column_ordering(left: &Task, right: &Task) -> Ordering {
    left.sort_order()
        .cmp(&right.sort_order())
        .then_with(|| right.created_at().cmp(&left.created_at()))
}

/// Sorts tasks into the canonical read order.
///
/// Columns appear in board display order, each ordered by
/// [`column_ordering`]. Every listing surface honours this order.
pub fn sort_canonical(tasks: &mut [Task]) {
    tasks.sort_by(|left, right| {
        left.status()
            .cmp(&right.status())
            .then_with(|| column_ordering(left, right))
    });
}
