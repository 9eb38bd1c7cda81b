//! Rectangle drawing algorithms

use crate::Position;

use super::{BrushContext, ClipWindow, DrawTarget};

/// Get all points of a filled rectangle that lie inside `clip`
///
/// Works regardless of corner order (handles inverted rectangles).
/// Both corners are included.
pub fn rectangle_points(p0: Position, p1: Position, clip: ClipWindow) -> Vec<Position> {
    let rows = clip.clamp_range(p0.row.min(p1.row) as i64, p0.row.max(p1.row) as i64);
    let cols = clip.clamp_range(p0.col.min(p1.col) as i64, p0.col.max(p1.col) as i64);
    let (Some((min_row, max_row)), Some((min_col, max_col))) = (rows, cols) else {
        return Vec::new();
    };

    let height = (max_row as i64 - min_row as i64 + 1) as usize;
    let width = (max_col as i64 - min_col as i64 + 1) as usize;
    let mut points = Vec::with_capacity(height.saturating_mul(width));
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            points.push(Position::new(row, col));
        }
    }
    points
}

/// Draw a solid rectangle spanning p0 and p1
pub fn draw_rectangle<T: DrawTarget>(target: &mut T, ctx: &BrushContext, p0: Position, p1: Position) {
    for pt in rectangle_points(p0, p1, ClipWindow::grid(target.size())) {
        ctx.plot_point(target, pt);
    }
}
