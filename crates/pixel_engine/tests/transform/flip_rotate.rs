use pixel_engine::{Color, OperationType, UndoState};

use crate::helpers::{create_test_session, paint, painted_cells};

fn asymmetric_session() -> pixel_engine::CanvasSession {
    let mut session = create_test_session();
    paint(&mut session, 0, 0, Color::RED);
    paint(&mut session, 0, 1, Color::GREEN);
    paint(&mut session, 5, 2, Color::BLUE);
    session
}

#[test]
fn test_flip_h() {
    let mut session = asymmetric_session();
    session.flip_h();
    let grid = session.active_grid();
    assert_eq!(grid.get(0, 15), Some(Color::RED));
    assert_eq!(grid.get(0, 14), Some(Color::GREEN));
    assert_eq!(grid.get(5, 13), Some(Color::BLUE));
    assert_eq!(grid.painted_count(), 3);
}

#[test]
fn test_flip_v() {
    let mut session = asymmetric_session();
    session.flip_v();
    let grid = session.active_grid();
    assert_eq!(grid.get(15, 0), Some(Color::RED));
    assert_eq!(grid.get(10, 2), Some(Color::BLUE));
}

#[test]
fn test_flip_h_is_involution() {
    let mut session = asymmetric_session();
    let original = session.active_grid().clone();
    session.flip_h();
    session.flip_h();
    assert_eq!(session.active_grid(), &original);
}

#[test]
fn test_four_rotations_are_identity() {
    let mut session = asymmetric_session();
    let original = session.active_grid().clone();
    for _ in 0..4 {
        session.rotate(1);
    }
    assert_eq!(session.active_grid(), &original);
}

#[test]
fn test_rotate_clockwise() {
    let mut session = asymmetric_session();
    session.rotate(1);
    assert_eq!(session.active_grid().get(0, 15), Some(Color::RED));
    assert_eq!(session.active_grid().get(1, 15), Some(Color::GREEN));
    assert_eq!(session.undo_description().as_deref(), Some("Rotate 90°"));
}

#[test]
fn test_negative_rotation_is_counter_clockwise() {
    let mut session = asymmetric_session();
    let mut other = asymmetric_session();
    session.rotate(-1);
    other.rotate(3);
    assert_eq!(session.active_grid(), other.active_grid());
    assert_eq!(session.active_grid().get(15, 0), Some(Color::RED));
}

#[test]
fn test_full_turn_is_not_recorded() {
    let mut session = asymmetric_session();
    let len = session.undo_stack_len();
    session.rotate(0);
    session.rotate(4);
    assert_eq!(session.undo_stack_len(), len);
}

#[test]
fn test_transform_records_once_and_undoes() {
    let mut session = asymmetric_session();
    let before = session.active_grid().clone();
    let len = session.undo_stack_len();
    session.rotate(2);
    assert_eq!(session.undo_stack_len(), len + 1);
    assert_eq!(session.history().current().map(|s| s.operation_type()), Some(OperationType::Transform));

    session.undo().unwrap();
    assert_eq!(session.active_grid(), &before);
}

#[test]
fn test_transform_affects_active_layer_only() {
    let mut session = create_test_session();
    paint(&mut session, 0, 0, Color::RED);
    session.add_layer();
    paint(&mut session, 0, 0, Color::BLUE);
    session.flip_v();

    assert_eq!(painted_cells(session.layers()[0].grid()), vec![(0, 0)]);
    assert_eq!(painted_cells(session.layers()[1].grid()), vec![(15, 0)]);
}

#[test]
fn test_clear_active_layer() {
    let mut session = asymmetric_session();
    session.clear_active_layer();
    assert!(session.active_grid().is_empty());
    assert_eq!(session.undo_description().as_deref(), Some("Clear layer"));
    session.undo().unwrap();
    assert_eq!(session.active_grid().painted_count(), 3);
}
