use pixel_engine::{EngineError, MoveDirection, UndoState};

use crate::helpers::create_test_session;

#[test]
fn test_new_session_has_one_layer() {
    let session = create_test_session();
    assert_eq!(session.layer_count(), 1);
    assert_eq!(session.active_index(), 0);
    let layer = session.active_layer();
    assert!(layer.visible);
    assert_eq!(layer.opacity(), 1.0);
    assert!(layer.grid().is_empty());
}

#[test]
fn test_add_layer_goes_on_top_and_becomes_active() {
    let mut session = create_test_session();
    assert_eq!(session.add_layer(), 1);
    assert_eq!(session.add_layer(), 2);
    assert_eq!(session.active_index(), 2);
    assert_eq!(session.layers()[2].name, "Layer 3");
    assert_eq!(session.undo_description().as_deref(), Some("Add layer"));
}

#[test]
fn test_delete_last_layer_rejected() {
    let mut session = create_test_session();
    assert_eq!(session.delete_layer(0), Err(EngineError::LastLayer));
    assert_eq!(session.layer_count(), 1);
    assert_eq!(session.undo_stack_len(), 1);
}

#[test]
fn test_delete_invalid_index_rejected() {
    let mut session = create_test_session();
    session.add_layer();
    assert_eq!(session.delete_layer(5), Err(EngineError::InvalidLayerIndex { index: 5, count: 2 }));
    assert_eq!(session.layer_count(), 2);
}

#[test]
fn test_delete_active_layer_clamps_index() {
    let mut session = create_test_session();
    session.add_layer();
    session.add_layer();
    session.delete_layer(2).unwrap();
    assert_eq!(session.layer_count(), 2);
    assert_eq!(session.active_index(), 1);
}

#[test]
fn test_move_layer_follows_active() {
    let mut session = create_test_session();
    session.add_layer();
    assert_eq!(session.move_layer(1, MoveDirection::Down), Ok(0));
    assert_eq!(session.active_index(), 0);
    assert_eq!(session.layers()[0].name, "Layer 2");
    assert_eq!(session.layers()[1].name, "Layer 1");
}

#[test]
fn test_move_past_ends_rejected() {
    let mut session = create_test_session();
    session.add_layer();
    let before = session.layer_stack().clone();
    assert!(session.move_layer(1, MoveDirection::Up).is_err());
    assert!(session.move_layer(0, MoveDirection::Down).is_err());
    assert_eq!(session.layer_stack(), &before);
    assert_eq!(session.undo_stack_len(), 2);
}

#[test]
fn test_toggle_visibility_records() {
    let mut session = create_test_session();
    assert_eq!(session.toggle_visibility(0), Ok(false));
    assert_eq!(session.undo_description().as_deref(), Some("Hide layer"));
    assert_eq!(session.toggle_visibility(0), Ok(true));
    assert_eq!(session.undo_stack_len(), 3);
}

#[test]
fn test_set_active_is_not_recorded() {
    let mut session = create_test_session();
    session.add_layer();
    session.set_active(0).unwrap();
    assert_eq!(session.active_index(), 0);
    assert_eq!(session.undo_stack_len(), 2);
    assert!(session.set_active(2).is_err());
    assert_eq!(session.active_index(), 0);
}

#[test]
fn test_opacity_is_clamped() {
    let mut session = create_test_session();
    session.set_layer_opacity(0, 1.5).unwrap();
    assert_eq!(session.layers()[0].opacity(), 1.0);
    session.set_layer_opacity(0, -0.5).unwrap();
    assert_eq!(session.layers()[0].opacity(), 0.0);
}

#[test]
fn test_undo_add_layer() {
    let mut session = create_test_session();
    session.add_layer();
    session.undo().unwrap();
    assert_eq!(session.layer_count(), 1);
    assert_eq!(session.active_index(), 0);
    session.redo().unwrap();
    assert_eq!(session.layer_count(), 2);
    assert_eq!(session.active_index(), 1);
}

#[test]
fn test_undo_delete_layer_restores_content() {
    let mut session = create_test_session();
    session.add_layer();
    crate::helpers::paint(&mut session, 2, 2, pixel_engine::Color::RED);
    session.delete_layer(1).unwrap();
    assert_eq!(session.composite().painted_count(), 0);

    session.undo().unwrap();
    assert_eq!(session.layer_count(), 2);
    assert_eq!(session.layers()[1].grid().get(2, 2), Some(pixel_engine::Color::RED));
}
