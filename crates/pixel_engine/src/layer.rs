use crate::Grid;

/// One grid plus its display properties
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub(crate) grid: Grid,
    pub visible: bool,
    opacity: f32,
}

impl Layer {
    /// Create a visible, fully opaque layer with an all-transparent grid
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(size),
            visible: true,
            opacity: 1.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set opacity, clamped to [0, 1]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }
}
