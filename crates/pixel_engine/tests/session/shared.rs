use std::thread;

use pixel_engine::{export, Color, ExportOptions, Tool};

use crate::helpers::create_test_session;

#[test]
fn test_shared_session_readers_see_edits() {
    let shared = create_test_session().into_shared();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            let mut session = shared.write();
            session.set_color(Color::RED);
            session.set_tool(Tool::Rectangle);
            session.apply_tool(0, 0).unwrap();
            session.apply_tool(3, 3).unwrap();
        })
    };
    writer.join().unwrap();

    let flat = shared.read().composite();
    assert_eq!(flat.painted_count(), 16);
}

#[test]
fn test_export_is_decoupled_from_later_edits() {
    let shared = create_test_session().into_shared();
    shared.write().apply(Tool::Brush, 0, 0).unwrap();

    let flat = shared.read().composite();
    shared.write().clear_active_layer();

    let mut png = Vec::new();
    export::write_png(&mut png, &flat, &ExportOptions::with_resolution(16)).unwrap();
    assert!(!png.is_empty());

    let image = export::render_rgba(&flat, &ExportOptions::with_resolution(16)).unwrap();
    assert_eq!(&image.data[..4], &[0, 0, 0, 0xFF]);
}
