//! Shared test helpers for canvas session tests

#![allow(dead_code)]

use pixel_engine::{CanvasSession, Color, Grid, Tool};

/// Create a 16x16 session
pub fn create_test_session() -> CanvasSession {
    CanvasSession::new(16).unwrap()
}

/// Create a session of the given size
pub fn create_session(size: usize) -> CanvasSession {
    CanvasSession::new(size).unwrap()
}

/// Paint a single cell with the brush in `color`
pub fn paint(session: &mut CanvasSession, row: i32, col: i32, color: Color) {
    session.set_color(color);
    session.apply(Tool::Brush, row, col).unwrap();
}

/// All painted cells of a grid in row-major order
pub fn painted_cells(grid: &Grid) -> Vec<(i32, i32)> {
    grid.iter().filter(|(_, c)| c.is_some()).map(|(p, _)| (p.row, p.col)).collect()
}

/// Draw a vertical wall of `color` in column 8, splitting a 16x16 canvas in two
pub fn paint_split_pattern(session: &mut CanvasSession, color: Color) {
    session.set_color(color);
    session.set_tool(Tool::Line);
    session.apply_tool(0, 8).unwrap();
    session.apply_tool(15, 8).unwrap();
}
