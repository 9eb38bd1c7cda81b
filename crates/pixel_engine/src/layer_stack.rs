//! Ordered layer collection with one active layer
//!
//! Index 0 is the bottom layer. The stack is never empty and the active index
//! always points at an existing layer; every mutation that could break this
//! either re-clamps the active index or is rejected before touching anything.

use crate::{EngineError, Grid, Layer, Result};

/// Direction for [`LayerStack::move_layer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the top of the stack (higher index)
    Up,
    /// Towards the bottom of the stack (lower index)
    Down,
}

impl MoveDirection {
    pub fn name(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: Vec<Layer>,
    active_index: usize,
    next_layer_number: usize,
}

impl LayerStack {
    /// Create a stack holding a single empty layer
    pub fn new(size: usize) -> Self {
        Self {
            layers: vec![Layer::new("Layer 1", size)],
            active_index: 0,
            next_layer_number: 2,
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false, a stack holds at least one layer
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Grid size shared by all layers
    pub fn size(&self) -> usize {
        self.layers[0].size()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active_index]
    }

    pub fn active_grid(&self) -> &Grid {
        &self.layers[self.active_index].grid
    }

    pub(crate) fn active_grid_mut(&mut self) -> &mut Grid {
        &mut self.layers[self.active_index].grid
    }

    /// Swap in a new grid for the active layer
    pub(crate) fn replace_active_grid(&mut self, grid: Grid) {
        debug_assert_eq!(grid.size(), self.size());
        self.layers[self.active_index].grid = grid;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.layers.len() {
            return Err(EngineError::invalid_layer(index, self.layers.len()));
        }
        Ok(())
    }

    /// Append a new empty layer on top and make it active
    ///
    /// Returns the index of the new layer.
    pub fn add_layer(&mut self) -> usize {
        let name = format!("Layer {}", self.next_layer_number);
        self.next_layer_number += 1;
        self.layers.push(Layer::new(name, self.size()));
        self.active_index = self.layers.len() - 1;
        self.active_index
    }

    /// Remove a layer
    ///
    /// The last remaining layer can't be deleted. When the active layer is
    /// removed the layer that slides into its slot becomes active (or the new
    /// top layer if the old top was removed).
    pub fn delete_layer(&mut self, index: usize) -> Result<Layer> {
        self.check_index(index)?;
        if self.layers.len() <= 1 {
            return Err(EngineError::LastLayer);
        }
        let removed = self.layers.remove(index);
        if index < self.active_index {
            self.active_index -= 1;
        }
        self.active_index = self.active_index.min(self.layers.len() - 1);
        Ok(removed)
    }

    /// Swap a layer with its neighbour; returns the layer's new index
    ///
    /// The active index follows the layer it pointed at.
    pub fn move_layer(&mut self, index: usize, direction: MoveDirection) -> Result<usize> {
        self.check_index(index)?;
        let target = match direction {
            MoveDirection::Up if index + 1 < self.layers.len() => index + 1,
            MoveDirection::Down if index > 0 => index - 1,
            _ => {
                return Err(EngineError::LayerMoveOutOfBounds {
                    index,
                    direction: direction.name(),
                });
            }
        };
        self.layers.swap(index, target);
        if self.active_index == index {
            self.active_index = target;
        } else if self.active_index == target {
            self.active_index = index;
        }
        Ok(target)
    }

    /// Flip a layer's visibility; returns the new visibility
    pub fn toggle_visibility(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let layer = &mut self.layers[index];
        layer.visible = !layer.visible;
        Ok(layer.visible)
    }

    pub fn set_active(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.active_index = index;
        Ok(())
    }

    pub fn set_opacity(&mut self, index: usize, opacity: f32) -> Result<()> {
        self.check_index(index)?;
        self.layers[index].set_opacity(opacity);
        Ok(())
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.layers[index].name = name.into();
        Ok(())
    }

    /// Resize every layer, keeping the overlapping top-left region
    pub(crate) fn resize(&mut self, new_size: usize) {
        for layer in &mut self.layers {
            layer.grid = layer.grid.resized(new_size);
        }
    }
}
