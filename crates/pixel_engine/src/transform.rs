//! Whole-grid flips and rotations
//!
//! Every transform reads from the untouched source and writes into a fresh
//! grid, so cells never observe a partially transformed buffer.

use crate::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Mirror left/right
    FlipHorizontal,
    /// Mirror top/bottom
    FlipVertical,
    /// Quarter turn clockwise
    Rotate90,
    Rotate180,
    /// Quarter turn counter-clockwise
    Rotate270,
}

impl Transform {
    /// The rotation for `quarter_turns` clockwise turns, `None` for a full turn
    ///
    /// Negative values turn counter-clockwise.
    pub fn from_quarter_turns(quarter_turns: i32) -> Option<Transform> {
        match quarter_turns.rem_euclid(4) {
            1 => Some(Transform::Rotate90),
            2 => Some(Transform::Rotate180),
            3 => Some(Transform::Rotate270),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Transform::FlipHorizontal => "Flip horizontal",
            Transform::FlipVertical => "Flip vertical",
            Transform::Rotate90 => "Rotate 90°",
            Transform::Rotate180 => "Rotate 180°",
            Transform::Rotate270 => "Rotate 270°",
        }
    }

    /// Source cell of destination `(row, col)` on an `n × n` grid
    fn source(&self, n: i32, row: i32, col: i32) -> (i32, i32) {
        let last = n - 1;
        match self {
            Transform::FlipHorizontal => (row, last - col),
            Transform::FlipVertical => (last - row, col),
            Transform::Rotate90 => (last - col, row),
            Transform::Rotate180 => (last - row, last - col),
            Transform::Rotate270 => (col, last - row),
        }
    }

    /// Produce the transformed copy of `grid`
    pub fn apply(&self, grid: &Grid) -> Grid {
        let n = grid.size() as i32;
        let mut result = Grid::new(grid.size());
        for row in 0..n {
            for col in 0..n {
                let (src_row, src_col) = self.source(n, row, col);
                result.set(row, col, grid.get(src_row, src_col));
            }
        }
        result
    }
}
