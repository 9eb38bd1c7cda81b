//! Circle drawing algorithms
//!
//! Circles are rings: a cell is part of the circle if its center lies within
//! half a cell of the ideal radius.

use crate::Position;

use super::{BrushContext, ClipWindow, DrawTarget};

/// Euclidean distance between two cells
pub fn distance(p0: Position, p1: Position) -> f64 {
    let dr = (p1.row as i64 - p0.row as i64) as f64;
    let dc = (p1.col as i64 - p0.col as i64) as f64;
    dr.hypot(dc)
}

/// Get all points on the ring around `center` passing through `edge`
///
/// The search window is the radius rounded to the nearest integer, cut down to `clip`.
pub fn circle_points(center: Position, edge: Position, clip: ClipWindow) -> Vec<Position> {
    let radius = distance(center, edge);
    let window = radius.round() as i64;

    let (row, col) = (center.row as i64, center.col as i64);
    let rows = clip.clamp_range(row - window, row + window);
    let cols = clip.clamp_range(col - window, col + window);
    let (Some((min_row, max_row)), Some((min_col, max_col))) = (rows, cols) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for r in min_row..=max_row {
        for c in min_col..=max_col {
            let dy = (r as i64 - row) as f64;
            let dx = (c as i64 - col) as f64;
            if (dy.hypot(dx) - radius).abs() < 0.5 {
                points.push(Position::new(r, c));
            }
        }
    }
    points
}

/// Draw a circle ring centered on `center` through `edge`
pub fn draw_circle<T: DrawTarget>(target: &mut T, ctx: &BrushContext, center: Position, edge: Position) {
    for pt in circle_points(center, edge, ClipWindow::grid(target.size())) {
        ctx.plot_point(target, pt);
    }
}
