//! Hit-testing and insertion-index tests for board geometry.

use super::helpers::{ROW_HEIGHT, board_layout, column_tail_point, row_press_point};
use crate::board::domain::{TaskId, TaskStatus};
use crate::ui::layout::{Point, Rect};
use eyre::{bail, ensure};
use rstest::rstest;

fn three_ids() -> [TaskId; 3] {
    [TaskId::new(), TaskId::new(), TaskId::new()]
}

#[rstest]
fn column_at_resolves_each_column() -> eyre::Result<()> {
    let layout = board_layout([&[], &[], &[]]);
    let hit = layout.column_at(Point::new(250, 40));
    ensure!(hit.map(|column| column.status) == Some(TaskStatus::InProgress));
    ensure!(layout.column_at(Point::new(700, 40)).is_none());
    ensure!(layout.column_at(Point::new(40, -30)).is_none());
    Ok(())
}

#[rstest]
fn row_at_finds_the_pressed_task() -> eyre::Result<()> {
    let [top, middle, bottom] = three_ids();
    let layout = board_layout([&[top, middle, bottom], &[], &[]]);

    let Some((status, row)) = layout.row_at(row_press_point(0, 1)) else {
        bail!("press should land on a row");
    };
    ensure!(status == TaskStatus::ToDo);
    ensure!(row.task_id == middle);

    // A press in the empty space below the rows hits the column only.
    ensure!(layout.row_at(column_tail_point(0)).is_none());
    Ok(())
}

#[rstest]
#[case(10, 0)]
#[case(70, 1)]
#[case(150, 2)]
#[case(500, 3)]
fn insertion_index_follows_row_midpoints(#[case] pointer_y: i32, #[case] expected: usize) {
    let [top, middle, bottom] = three_ids();
    let layout = board_layout([&[top, middle, bottom], &[], &[]]);
    let dragged = TaskId::new();

    let index = layout
        .columns
        .first()
        .map(|column| column.insertion_index(Point::new(10, pointer_y), dragged));
    assert_eq!(index, Some(expected));
}

#[rstest]
fn insertion_index_skips_the_dragged_task() -> eyre::Result<()> {
    let [top, middle, bottom] = three_ids();
    let layout = board_layout([&[top, middle, bottom], &[], &[]]);

    // With the top row dragged, the visible list is [middle, bottom]; a
    // pointer over the top row sits above middle's midpoint.
    let Some(column) = layout.columns.first() else {
        bail!("layout should have columns");
    };
    ensure!(column.insertion_index(Point::new(10, 30), top) == 0);
    Ok(())
}

#[rstest]
fn insertion_index_of_an_empty_column_is_zero() -> eyre::Result<()> {
    let layout = board_layout([&[], &[], &[]]);
    let Some(column) = layout.columns.first() else {
        bail!("layout should have columns");
    };
    ensure!(column.insertion_index(Point::new(10, 90), TaskId::new()) == 0);
    Ok(())
}

#[rstest]
fn sequence_with_places_the_dragged_task() -> eyre::Result<()> {
    let [top, middle, bottom] = three_ids();
    let layout = board_layout([&[top, middle, bottom], &[], &[]]);
    let Some(column) = layout.columns.first() else {
        bail!("layout should have columns");
    };

    ensure!(column.sequence_with(top, 2) == vec![middle, bottom, top]);
    ensure!(column.sequence_with(bottom, 0) == vec![bottom, top, middle]);
    // Indexes past the visible end clamp to an append.
    ensure!(column.sequence_with(top, 9) == vec![middle, bottom, top]);
    Ok(())
}

#[rstest]
fn midpoint_comparison_is_strict() {
    let bounds = Rect::new(0, 0, 200, ROW_HEIGHT);
    assert!(bounds.pointer_above_midpoint(39));
    assert!(!bounds.pointer_above_midpoint(40));
    assert!(!bounds.pointer_above_midpoint(41));
}

#[rstest]
fn rect_containment_includes_edges() {
    let bounds = Rect::new(10, 10, 100, 50);
    assert!(bounds.contains(Point::new(10, 10)));
    assert!(bounds.contains(Point::new(110, 60)));
    assert!(!bounds.contains(Point::new(111, 30)));
    assert!(!bounds.contains(Point::new(50, 5)));
}
