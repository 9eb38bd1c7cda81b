use pixel_engine::{CanvasSession, Color, EditorSettings, UndoState, MAX_HISTORY};

use crate::helpers::{create_test_session, paint};

#[test]
fn test_history_is_bounded() {
    let mut session = create_test_session();
    for i in 0..60 {
        paint(&mut session, i % 16, i / 16, Color::RED);
    }
    assert_eq!(session.undo_stack_len(), MAX_HISTORY);
}

#[test]
fn test_oldest_entries_are_evicted_first() {
    let mut session = create_test_session();
    for i in 0..55 {
        paint(&mut session, i % 16, i / 16, Color::RED);
    }
    while session.can_undo() {
        session.undo().unwrap();
    }
    // the initial snapshot and the first five strokes were dropped
    assert_eq!(session.undo_stack_len(), 1);
    assert_eq!(session.active_grid().painted_count(), 6);
    assert_eq!(session.redo_stack_len(), MAX_HISTORY - 1);
}

#[test]
fn test_redo_stack_is_bounded() {
    let mut session = create_test_session();
    session.set_history_limit(5);
    for i in 0..10 {
        paint(&mut session, 0, i, Color::RED);
    }
    assert_eq!(session.undo_stack_len(), 5);
    while session.can_undo() {
        session.undo().unwrap();
    }
    assert_eq!(session.redo_stack_len(), 4);
    assert_eq!(session.active_grid().painted_count(), 6);
}

#[test]
fn test_history_limit_from_settings() {
    let settings = EditorSettings {
        canvas_size: 16,
        history_limit: 3,
        ..Default::default()
    };
    let mut session = CanvasSession::with_settings(&settings).unwrap();
    for i in 0..10 {
        paint(&mut session, 0, i, Color::RED);
    }
    assert_eq!(session.undo_stack_len(), 3);
    assert_eq!(session.history().limit(), 3);
}
