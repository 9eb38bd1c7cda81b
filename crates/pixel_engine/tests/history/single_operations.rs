use pixel_engine::{Color, OperationType, Tool, UndoState};

use crate::helpers::{create_test_session, paint};

#[test]
fn test_new_session_has_initial_snapshot() {
    let session = create_test_session();
    assert_eq!(session.undo_stack_len(), 1);
    assert_eq!(session.redo_stack_len(), 0);
    assert!(!session.can_undo());
    assert!(!session.can_redo());
    assert_eq!(session.undo_description(), None);
}

#[test]
fn test_undo_without_history_is_noop() {
    let mut session = create_test_session();
    session.undo().unwrap();
    session.redo().unwrap();
    assert_eq!(session.undo_stack_len(), 1);
    assert_eq!(session.redo_stack_len(), 0);
    assert!(!session.is_dirty());
}

#[test]
fn test_undo_moves_to_redo_stack() {
    let mut session = create_test_session();
    paint(&mut session, 1, 1, Color::RED);
    session.undo().unwrap();

    assert_eq!(session.undo_stack_len(), 1);
    assert_eq!(session.redo_stack_len(), 1);
    assert_eq!(session.redo_description().as_deref(), Some("Brush"));
    assert!(session.active_grid().is_empty());
}

#[test]
fn test_undo_then_redo_restores_state() {
    let mut session = create_test_session();
    paint(&mut session, 1, 1, Color::RED);
    paint(&mut session, 2, 2, Color::BLUE);
    paint(&mut session, 3, 3, Color::GREEN);
    let before = session.layer_stack().clone();

    session.undo().unwrap();
    assert_eq!(session.active_grid().get(3, 3), None);
    assert_eq!(session.active_grid().get(2, 2), Some(Color::BLUE));

    session.redo().unwrap();
    assert_eq!(session.layer_stack(), &before);
}

#[test]
fn test_multi_step_undo_redo() {
    let mut session = create_test_session();
    for i in 0..5 {
        paint(&mut session, i, 0, Color::RED);
    }
    for _ in 0..3 {
        session.undo().unwrap();
    }
    assert_eq!(session.active_grid().painted_count(), 2);
    assert_eq!(session.redo_stack_len(), 3);

    session.redo().unwrap();
    session.redo().unwrap();
    assert_eq!(session.active_grid().painted_count(), 4);
    assert_eq!(session.redo_stack_len(), 1);
}

#[test]
fn test_new_action_clears_redo() {
    let mut session = create_test_session();
    paint(&mut session, 1, 1, Color::RED);
    session.undo().unwrap();
    assert!(session.can_redo());

    paint(&mut session, 2, 2, Color::BLUE);
    assert!(!session.can_redo());
    assert_eq!(session.redo_description(), None);
}

#[test]
fn test_undo_across_layer_switch_restores_original_layer() {
    let mut session = create_test_session();
    paint(&mut session, 4, 4, Color::RED);
    session.add_layer();
    session.set_active(0).unwrap();
    paint(&mut session, 5, 5, Color::BLUE);

    session.set_active(1).unwrap();
    session.undo().unwrap();

    assert_eq!(session.layers()[0].grid().get(5, 5), None);
    assert_eq!(session.layers()[0].grid().get(4, 4), Some(Color::RED));
    assert!(session.layers()[1].grid().is_empty());
}

#[test]
fn test_snapshot_does_not_alias_live_grid() {
    let mut session = create_test_session();
    paint(&mut session, 0, 0, Color::RED);
    session.apply(Tool::Eraser, 0, 0).unwrap();

    let snapshot = session.history().current().unwrap();
    assert_eq!(snapshot.operation_type(), OperationType::EditPixels);
    assert_eq!(snapshot.stack().active_grid().get(0, 0), None);

    session.undo().unwrap();
    assert_eq!(session.active_grid().get(0, 0), Some(Color::RED));
}

#[test]
fn test_record_snapshot_and_clear_history() {
    let mut session = create_test_session();
    session.record_snapshot();
    assert_eq!(session.undo_stack_len(), 2);
    assert_eq!(session.undo_description().as_deref(), Some("Snapshot"));

    session.clear_history();
    assert_eq!(session.undo_stack_len(), 1);
    assert!(!session.can_undo());
}

#[test]
fn test_dirty_tracking() {
    let mut session = create_test_session();
    assert!(!session.is_dirty());
    paint(&mut session, 0, 0, Color::RED);
    assert!(session.is_dirty());
    session.mark_saved();
    assert!(!session.is_dirty());
    session.undo().unwrap();
    assert!(session.is_dirty());
}

#[test]
fn test_eyedropper_does_not_touch_history() {
    let mut session = create_test_session();
    paint(&mut session, 0, 0, Color::RED);
    session.undo().unwrap();
    session.apply(Tool::Eyedropper, 0, 0).unwrap();
    assert!(session.can_redo());
    assert_eq!(session.undo_stack_len(), 1);
}
