use crate::{Color, EngineError, Result};

/// A cell address on the grid
///
/// Signed so tool algorithms can produce off-canvas points that are later
/// clipped instead of wrapping around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Square buffer of optional colors, stored row-major
///
/// Grids are plain values: cloning yields an independent buffer, so
/// snapshots and clipboard contents never share state with a live layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an all-transparent grid of `size × size` cells
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_valid(row, col) {
            Some(row as usize * self.size + col as usize)
        } else {
            None
        }
    }

    /// Color at a cell; out-of-range cells read as transparent
    pub fn get(&self, row: i32, col: i32) -> Option<Color> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Set a cell; returns false (and does nothing) when out of range
    pub fn set(&mut self, row: i32, col: i32, value: Option<Color>) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Checked read
    pub fn try_get(&self, row: i32, col: i32) -> Result<Option<Color>> {
        self.index(row, col).map(|i| self.cells[i]).ok_or(EngineError::OutOfBounds { row, col, size: self.size })
    }

    /// Checked write
    pub fn try_set(&mut self, row: i32, col: i32, value: Option<Color>) -> Result<()> {
        let i = self.index(row, col).ok_or(EngineError::OutOfBounds { row, col, size: self.size })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Reset every cell to transparent
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Returns true if no cell holds a color
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of cells holding a color
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Raw row-major cell slice
    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Color>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Position::new((i / size) as i32, (i % size) as i32), *c))
    }

    /// A new grid of `new_size` holding the overlapping top-left region of this one
    ///
    /// Growing keeps everything, shrinking crops the right and bottom edges.
    pub fn resized(&self, new_size: usize) -> Grid {
        let mut result = Grid::new(new_size);
        let overlap = self.size.min(result.size);
        for row in 0..overlap {
            let src = row * self.size;
            let dst = row * result.size;
            result.cells[dst..dst + overlap].copy_from_slice(&self.cells[src..src + overlap]);
        }
        result
    }

    /// Overwrite the overlapping top-left region with `source`
    ///
    /// Transparent source cells overwrite too. Cells outside the overlap
    /// are left untouched.
    pub fn overlay(&mut self, source: &Grid) {
        let overlap = self.size.min(source.size);
        for row in 0..overlap {
            let src = row * source.size;
            let dst = row * self.size;
            self.cells[dst..dst + overlap].copy_from_slice(&source.cells[src..src + overlap]);
        }
    }
}
