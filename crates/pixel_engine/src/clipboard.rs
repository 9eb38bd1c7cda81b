//! Single-slot clipboard holding a flattened canvas snapshot

use crate::Grid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clipboard {
    grid: Option<Grid>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `grid`, replacing any previous content
    pub fn store(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    pub fn content(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn has_content(&self) -> bool {
        self.grid.is_some()
    }

    pub fn clear(&mut self) {
        self.grid = None;
    }

    /// Overlay the clipboard onto `target`
    ///
    /// Returns false when the clipboard is empty. Only the overlapping top-left
    /// region is written when sizes differ; with matching sizes every cell is
    /// replaced, transparent ones included.
    pub fn paste_into(&self, target: &mut Grid) -> bool {
        match &self.grid {
            Some(grid) => {
                target.overlay(grid);
                true
            }
            None => false,
        }
    }
}
