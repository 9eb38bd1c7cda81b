use pixel_engine::{Color, Tool, ToolOutcome, UndoState};

use crate::helpers::{create_test_session, paint_split_pattern};

#[test]
fn test_fill_repaints_connected_region_only() {
    let mut session = create_test_session();
    paint_split_pattern(&mut session, Color::BLACK);

    session.set_color(Color::BLUE);
    assert_eq!(session.apply(Tool::Fill, 0, 0).unwrap(), ToolOutcome::Painted);

    let grid = session.active_grid();
    for (pos, color) in grid.iter() {
        let expected = match pos.col {
            0..=7 => Some(Color::BLUE),
            8 => Some(Color::BLACK),
            _ => None,
        };
        assert_eq!(color, expected, "cell ({}, {})", pos.row, pos.col);
    }
}

#[test]
fn test_fill_is_idempotent() {
    let mut session = create_test_session();
    paint_split_pattern(&mut session, Color::BLACK);
    session.set_color(Color::GREEN);
    session.apply(Tool::Fill, 4, 12).unwrap();

    let once = session.active_grid().clone();
    let len = session.undo_stack_len();

    assert_eq!(session.apply_tool(4, 12).unwrap(), ToolOutcome::Unchanged);
    assert_eq!(session.active_grid(), &once);
    assert_eq!(session.undo_stack_len(), len);
}

#[test]
fn test_fill_same_color_records_nothing() {
    let mut session = create_test_session();
    paint_split_pattern(&mut session, Color::RED);
    let len = session.undo_stack_len();

    session.set_color(Color::RED);
    assert_eq!(session.apply(Tool::Fill, 3, 8).unwrap(), ToolOutcome::Unchanged);
    assert_eq!(session.undo_stack_len(), len);
}

#[test]
fn test_fill_empty_canvas_then_undo() {
    let mut session = create_test_session();
    session.set_color(Color::RED);
    session.apply(Tool::Fill, 7, 7).unwrap();
    assert_eq!(session.active_grid().painted_count(), 256);
    assert_eq!(session.undo_description().as_deref(), Some("Fill"));

    session.undo().unwrap();
    assert!(session.active_grid().is_empty());
}

#[test]
fn test_fill_off_canvas_is_noop() {
    let mut session = create_test_session();
    assert_eq!(session.apply(Tool::Fill, 16, 0).unwrap(), ToolOutcome::Unchanged);
    assert!(session.active_grid().is_empty());
}
