//! Drag gesture state machine and drop command derivation.
//!
//! One controller instance owns one board view's gesture state, replacing
//! document-wide delegated listeners with an explicit state machine that is
//! torn down with its view. Pointer handlers are synchronous and never
//! block; the network write a drop triggers happens outside the controller,
//! which stays in its settling phase until the round trip resolves.

use super::layout::{BoardLayout, Point};
use crate::board::domain::{TaskId, TaskStatus};

/// Movement in pixels, on either axis, required before an armed press
/// becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: i32 = 10;

/// Command emitted by a completed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragCommand {
    /// The task was dropped on a different column: relocate it, appending
    /// to the destination column's end.
    MoveToColumn {
        /// Dragged task.
        task_id: TaskId,
        /// Destination column.
        status: TaskStatus,
    },
    /// The task was dropped within its own column: persist the column's
    /// final sequence.
    ReorderColumn {
        /// Column being reordered.
        status: TaskStatus,
        /// Final id sequence, dragged task included at its new index.
        ordered_ids: Vec<TaskId>,
    },
}

/// Hovered drop position, re-derived on every pointer move so the renderer
/// can place its drop placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    /// Column under the pointer.
    pub status: TaskStatus,
    /// Insertion index within the column's visible rows.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed {
        task_id: TaskId,
        origin: TaskStatus,
        pressed_at: Point,
    },
    Dragging {
        task_id: TaskId,
        origin: TaskStatus,
        target: Option<DropTarget>,
    },
    Settling,
}

/// State machine over a single drag gesture.
///
/// `Idle → Armed` on pressing a task, `Armed → Dragging` once movement
/// exceeds the threshold, `Dragging → Settling` when a drop emits a
/// command, and `Settling → Idle` when the command's round trip resolves.
/// Pointer-downs during settling are ignored, so a second drag cannot
/// start across the async gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragController {
    phase: Phase,
    threshold: i32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    /// Creates a controller with the default movement threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }

    /// Creates a controller with a custom movement threshold.
    #[must_use]
    pub const fn with_threshold(threshold: i32) -> Self {
        Self {
            phase: Phase::Idle,
            threshold,
        }
    }

    /// Handles a pointer press (mouse and touch funnel in here alike).
    ///
    /// Arms the gesture when the pointer lands on a task row. Ignored
    /// unless idle.
    pub fn on_pointer_down(&mut self, pointer: Point, layout: &BoardLayout) {
        if !matches!(self.phase, Phase::Idle) {
            return;
        }
        if let Some((status, row)) = layout.row_at(pointer) {
            self.phase = Phase::Armed {
                task_id: row.task_id,
                origin: status,
                pressed_at: pointer,
            };
        }
    }

    /// Handles pointer movement, returning the current drop target while
    /// dragging.
    ///
    /// Promotes an armed press to a drag once movement exceeds the
    /// threshold on either axis, then re-derives the hovered column and
    /// insertion index on every move. Leaving every column clears the
    /// target.
    pub fn on_pointer_move(&mut self, pointer: Point, layout: &BoardLayout) -> Option<DropTarget> {
        let (dragged, from) = match &self.phase {
            Phase::Armed {
                task_id,
                origin,
                pressed_at,
            } => {
                if !exceeds_threshold(*pressed_at, pointer, self.threshold) {
                    return None;
                }
                (*task_id, *origin)
            }
            Phase::Dragging {
                task_id, origin, ..
            } => (*task_id, *origin),
            Phase::Idle | Phase::Settling => return None,
        };
        let target = derive_target(pointer, layout, dragged);
        self.phase = Phase::Dragging {
            task_id: dragged,
            origin: from,
            target,
        };
        target
    }

    /// Handles pointer release, deriving the drop command.
    ///
    /// An armed press that never exceeded the threshold is a click: the
    /// gesture ends with no command. A drag released outside every column
    /// cancels with nothing left behind. A drop on another column
    /// relocates the task (append semantics); a drop within the origin
    /// column reorders it, and the command carries the column's full final
    /// sequence. Emitting a command enters the settling phase until
    /// [`Self::command_resolved`].
    pub fn on_pointer_up(&mut self, pointer: Point, layout: &BoardLayout) -> Option<DragCommand> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle | Phase::Armed { .. } => None,
            Phase::Settling => {
                self.phase = Phase::Settling;
                None
            }
            Phase::Dragging {
                task_id, origin, ..
            } => {
                let Some(column) = layout.column_at(pointer) else {
                    return None;
                };
                let command = if column.status == origin {
                    let index = column.insertion_index(pointer, task_id);
                    DragCommand::ReorderColumn {
                        status: column.status,
                        ordered_ids: column.sequence_with(task_id, index),
                    }
                } else {
                    DragCommand::MoveToColumn {
                        task_id,
                        status: column.status,
                    }
                };
                self.phase = Phase::Settling;
                Some(command)
            }
        }
    }

    /// Aborts the gesture with no command and no visual state left behind.
    ///
    /// Has no effect while a drop command is settling.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, Phase::Settling) {
            self.phase = Phase::Idle;
        }
    }

    /// Marks the in-flight drop command as resolved, ending the settling
    /// phase. Called on success and failure alike; the board reloads and
    /// re-renders either way.
    pub fn command_resolved(&mut self) {
        if matches!(self.phase, Phase::Settling) {
            self.phase = Phase::Idle;
        }
    }

    /// Returns whether the controller is idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns the task being dragged or armed, if any.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<TaskId> {
        match &self.phase {
            Phase::Armed { task_id, .. } | Phase::Dragging { task_id, .. } => Some(*task_id),
            Phase::Idle | Phase::Settling => None,
        }
    }

    /// Returns the current drop target while dragging.
    #[must_use]
    pub const fn drop_target(&self) -> Option<DropTarget> {
        match &self.phase {
            Phase::Dragging { target, .. } => *target,
            Phase::Idle | Phase::Armed { .. } | Phase::Settling => None,
        }
    }
}

const fn exceeds_threshold(pressed_at: Point, pointer: Point, threshold: i32) -> bool {
    pointer.x.saturating_sub(pressed_at.x).abs() > threshold
        || pointer.y.saturating_sub(pressed_at.y).abs() > threshold
}

fn derive_target(pointer: Point, layout: &BoardLayout, dragged: TaskId) -> Option<DropTarget> {
    layout.column_at(pointer).map(|column| DropTarget {
        status: column.status,
        index: column.insertion_index(pointer, dragged),
    })
}
