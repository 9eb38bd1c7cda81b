//! Flood fill
//!
//! 4-connected BFS bounded by exact color equality. The target color may be
//! `None`, so filling an unpainted area works the same as a painted one.

use std::collections::{HashSet, VecDeque};

use crate::{Color, Position};

use super::DrawTarget;

const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Compute the 4-connected region around `start` sharing its color
///
/// Returns the set of cells that should be filled without modifying anything.
/// An out-of-range start yields an empty set.
pub fn flood_fill_points<T: DrawTarget>(target: &T, start: Position) -> HashSet<Position> {
    let mut result = HashSet::new();
    if !target.is_valid(start) {
        return result;
    }

    let target_color = target.color_at(start);

    let mut queue = VecDeque::new();
    queue.push_back(start);
    result.insert(start);

    while let Some(pos) = queue.pop_front() {
        for (dr, dc) in NEIGHBOURS {
            let next = Position::new(pos.row + dr, pos.col + dc);
            if !target.is_valid(next) || result.contains(&next) {
                continue;
            }
            if target.color_at(next) == target_color {
                result.insert(next);
                queue.push_back(next);
            }
        }
    }

    result
}

/// Repaint the region around `start` with `fill`
///
/// No-op when `start` is out of range or already holds `fill`.
/// Returns the number of cells repainted.
pub fn flood_fill<T: DrawTarget>(target: &mut T, start: Position, fill: Option<Color>) -> usize {
    if !target.is_valid(start) || target.color_at(start) == fill {
        return 0;
    }

    let points = flood_fill_points(target, start);
    for pos in &points {
        target.set_color(*pos, fill);
    }
    points.len()
}
