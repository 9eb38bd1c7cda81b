//! Brush library for pixel drawing operations
//!
//! GUI-independent drawing primitives. Every algorithm works against the
//! [`DrawTarget`] trait so it can be tested on a bare [`Grid`].
//!
//! # Features
//! - Square brush stamps (1×1, 2×2, 3×3)
//! - Line drawing (Bresenham algorithm)
//! - Filled rectangles
//! - Circle rings
//! - Flood fill (4-connected BFS)
//! - Symmetry reflection across the vertical axis, horizontal axis or both
//!
//! # Example
//! ```
//! use pixel_engine::{BrushContext, Color, Grid, Position, SymmetryMode};
//! use pixel_engine::brushes::line::draw_line;
//!
//! let mut grid = Grid::new(16);
//! let ctx = BrushContext::new(Some(Color::RED)).with_symmetry(SymmetryMode::Vertical);
//! draw_line(&mut grid, &ctx, Position::new(0, 0), Position::new(3, 3));
//! assert_eq!(grid.get(3, 12), Some(Color::RED));
//! ```

pub mod circle;
pub mod fill;
pub mod line;
pub mod rectangle;

use serde::{Deserialize, Serialize};

use crate::{Color, EngineError, Grid, Position, Result};

/// A trait for targets that can be drawn on
///
/// This abstraction allows the brush algorithms to work with
/// any square cell buffer without depending on specific types.
pub trait DrawTarget {
    /// Edge length of the drawable area
    fn size(&self) -> usize;

    /// Get the color at a position
    fn color_at(&self, pos: Position) -> Option<Color>;

    /// Set the color at a position (`None` erases)
    fn set_color(&mut self, pos: Position, color: Option<Color>);

    /// Check if a position is within bounds
    fn is_valid(&self, pos: Position) -> bool {
        let size = self.size() as i32;
        pos.row >= 0 && pos.col >= 0 && pos.row < size && pos.col < size
    }
}

/// Inclusive cell window applied to both axes when generating shape points
///
/// Point generators only produce cells inside the window, so their work is
/// bounded by the window and not by how far off the canvas the input lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipWindow {
    pub min: i32,
    pub max: i32,
}

impl ClipWindow {
    /// The cells of a `size`x`size` grid
    pub fn grid(size: usize) -> Self {
        Self {
            min: 0,
            max: i32::try_from(size).unwrap_or(i32::MAX).saturating_sub(1),
        }
    }

    /// Grow the window by `margin` cells on every side
    pub fn expand(self, margin: i32) -> Self {
        Self {
            min: self.min.saturating_sub(margin),
            max: self.max.saturating_add(margin),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min..=self.max).contains(&pos.row) && (self.min..=self.max).contains(&pos.col)
    }

    /// Intersect the inclusive range `lo..=hi` with the window
    pub fn clamp_range(&self, lo: i64, hi: i64) -> Option<(i32, i32)> {
        let lo = lo.max(self.min as i64);
        let hi = hi.min(self.max as i64);
        (lo <= hi).then_some((lo as i32, hi as i32))
    }
}

impl DrawTarget for Grid {
    fn size(&self) -> usize {
        Grid::size(self)
    }

    fn color_at(&self, pos: Position) -> Option<Color> {
        self.get(pos.row, pos.col)
    }

    fn set_color(&mut self, pos: Position, color: Option<Color>) {
        self.set(pos.row, pos.col, color);
    }
}

/// Mirror mode for symmetrical drawing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryMode {
    #[default]
    None,
    /// Mirror rows across the horizontal center line
    Horizontal,
    /// Mirror columns across the vertical center line
    Vertical,
    Both,
}

impl SymmetryMode {
    pub fn mirrors_columns(&self) -> bool {
        matches!(self, SymmetryMode::Vertical | SymmetryMode::Both)
    }

    pub fn mirrors_rows(&self) -> bool {
        matches!(self, SymmetryMode::Horizontal | SymmetryMode::Both)
    }
}

/// Brush edge length, 1 to 3 cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: BrushSize = BrushSize(1);
    pub const MAX: BrushSize = BrushSize(3);

    pub fn new(size: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&size) {
            Ok(Self(size))
        } else {
            Err(EngineError::InvalidBrushSize { size })
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Offsets covered along one axis, relative to the brush center
    ///
    /// `⌊(k-1)/2⌋` cells before the center, the rest after it. Size 2 therefore
    /// extends towards +row/+col only.
    pub fn offsets(&self) -> std::ops::RangeInclusive<i32> {
        let k = self.0 as i32;
        let before = (k - 1) / 2;
        -before..=(k - 1 - before)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        BrushSize::new(value)
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Context for drawing operations
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrushContext {
    /// Color to paint, `None` erases
    pub color: Option<Color>,

    pub size: BrushSize,

    pub symmetry: SymmetryMode,
}

impl BrushContext {
    pub fn new(color: Option<Color>) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A context that erases cells
    pub fn eraser() -> Self {
        Self::new(None)
    }

    pub fn with_size(mut self, size: BrushSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryMode) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Plot a single point and its symmetry reflections
    ///
    /// Out-of-range points are ignored and produce no reflections.
    pub fn plot_point<T: DrawTarget>(&self, target: &mut T, pos: Position) {
        if !target.is_valid(pos) {
            return;
        }
        target.set_color(pos, self.color);

        if self.symmetry != SymmetryMode::None {
            self.plot_mirrored_points(target, pos);
        }
    }

    /// Stamp the brush window centered on `center`
    pub fn stamp<T: DrawTarget>(&self, target: &mut T, center: Position) {
        let offsets = self.size.offsets();
        for dr in offsets.clone() {
            for dc in offsets.clone() {
                if let (Some(row), Some(col)) = (center.row.checked_add(dr), center.col.checked_add(dc)) {
                    self.plot_point(target, Position::new(row, col));
                }
            }
        }
    }

    fn plot_mirrored_points<T: DrawTarget>(&self, target: &mut T, pos: Position) {
        let last = target.size() as i32 - 1;
        let mirror_col = last - pos.col;
        let mirror_row = last - pos.row;

        if self.symmetry.mirrors_columns() && mirror_col != pos.col {
            self.plot_single_point(target, Position::new(pos.row, mirror_col));
        }
        if self.symmetry.mirrors_rows() && mirror_row != pos.row {
            self.plot_single_point(target, Position::new(mirror_row, pos.col));
        }
        if self.symmetry == SymmetryMode::Both {
            let diagonal = Position::new(mirror_row, mirror_col);
            if diagonal != pos {
                self.plot_single_point(target, diagonal);
            }
        }
    }

    /// Plot a single point without triggering mirror recursion
    fn plot_single_point<T: DrawTarget>(&self, target: &mut T, pos: Position) {
        if target.is_valid(pos) {
            target.set_color(pos, self.color);
        }
    }
}

/// Stamp a brush at `center` with the context's size, color and symmetry
pub fn paint_brush<T: DrawTarget>(target: &mut T, ctx: &BrushContext, center: Position) {
    ctx.stamp(target, center);
}
