//! Layer compositing
//!
//! Flattens the visible layers of a stack, bottom to top, into one grid.
//! The first color to land on a transparent cell is taken as-is; later layers
//! are blended over it by their opacity.

use crate::{Color, Grid, LayerStack};

/// Flatten all visible layers into a new grid of the stack's size
pub fn composite(stack: &LayerStack) -> Grid {
    let size = stack.size();
    let mut result = Grid::new(size);

    for layer in stack.layers().iter().filter(|layer| layer.visible) {
        let opacity = layer.opacity();
        for (pos, color) in layer.grid().iter() {
            let Some(color) = color else {
                continue;
            };
            let blended = blend(result.get(pos.row, pos.col), color, opacity);
            result.set(pos.row, pos.col, Some(blended));
        }
    }

    result
}

/// Composite color of a single cell
pub fn composite_pixel(stack: &LayerStack, row: i32, col: i32) -> Option<Color> {
    stack
        .layers()
        .iter()
        .filter(|layer| layer.visible)
        .fold(None, |acc, layer| match layer.grid().get(row, col) {
            Some(color) => Some(blend(acc, color, layer.opacity())),
            None => acc,
        })
}

fn blend(existing: Option<Color>, color: Color, opacity: f32) -> Color {
    match existing {
        None => color,
        Some(existing) => Color::lerp(existing, color, opacity),
    }
}
