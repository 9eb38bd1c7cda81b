//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two cells.

use crate::Position;

use super::{BrushContext, ClipWindow, DrawTarget};

/// Offset along one axis after `step` of `steps`, rounded half away from the start
fn axis_offset(step: i64, delta: i64, steps: i64) -> i64 {
    let scaled = (2 * step as i128 * delta.abs() as i128 + steps as i128) / (2 * steps as i128);
    scaled as i64 * delta.signum()
}

/// Generate the points of the Bresenham line from p0 to p1 that lie inside `clip`
///
/// Both endpoints are included. The major axis advances one cell per step, so
/// only the steps that land inside the window are visited.
pub fn get_line_points(p0: Position, p1: Position, clip: ClipWindow) -> Vec<Position> {
    let (row0, col0) = (p0.row as i64, p0.col as i64);
    let dr = p1.row as i64 - row0;
    let dc = p1.col as i64 - col0;
    let steps = dr.abs().max(dc.abs());
    if steps == 0 {
        return if clip.contains(p0) { vec![p0] } else { Vec::new() };
    }

    let (major_start, major_delta) = if dc.abs() >= dr.abs() { (col0, dc) } else { (row0, dr) };
    let (min, max) = (clip.min as i64, clip.max as i64);
    let (first, last) = if major_delta > 0 {
        (min - major_start, max - major_start)
    } else {
        (major_start - max, major_start - min)
    };

    let mut points = Vec::new();
    for step in first.max(0)..=last.min(steps) {
        let row = row0 + axis_offset(step, dr, steps);
        let col = col0 + axis_offset(step, dc, steps);
        let pos = Position::new(row as i32, col as i32);
        if clip.contains(pos) {
            points.push(pos);
        }
    }
    points
}

/// Draw a line from p0 to p1
///
/// Each cell is plotted with the context color and symmetry, the brush size
/// is not applied.
pub fn draw_line<T: DrawTarget>(target: &mut T, ctx: &BrushContext, p0: Position, p1: Position) {
    for pt in get_line_points(p0, p1, ClipWindow::grid(target.size())) {
        ctx.plot_point(target, pt);
    }
}
