//! Layer operations for canvas sessions
//!
//! Structure changes (add, delete, move, visibility) and metadata edits
//! (opacity, name) record one snapshot each. An open stroke is committed as its
//! own entry first. Rejected calls leave the layers untouched and log a warning.

use crate::{MoveDirection, OperationType, Result};

use super::CanvasSession;

impl CanvasSession {
    fn guarded<T>(&self, action: &str, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            log::warn!("{} rejected: {}", action, err);
        }
        result
    }

    /// Add an empty layer on top and make it active; returns its index
    pub fn add_layer(&mut self) -> usize {
        self.end_stroke();
        let index = self.stack.add_layer();
        self.push_snapshot("Add layer", OperationType::Layers);
        index
    }

    /// Delete a layer; the last remaining layer can't be deleted
    pub fn delete_layer(&mut self, index: usize) -> Result<()> {
        self.end_stroke();
        let result = self.stack.delete_layer(index);
        self.guarded("Delete layer", result)?;
        self.push_snapshot("Delete layer", OperationType::Layers);
        Ok(())
    }

    /// Swap a layer with its neighbour; returns the layer's new index
    pub fn move_layer(&mut self, index: usize, direction: MoveDirection) -> Result<usize> {
        self.end_stroke();
        let result = self.stack.move_layer(index, direction);
        let new_index = self.guarded("Move layer", result)?;
        self.push_snapshot(format!("Move layer {}", direction.name()), OperationType::Layers);
        Ok(new_index)
    }

    /// Flip a layer's visibility; returns the new visibility
    pub fn toggle_visibility(&mut self, index: usize) -> Result<bool> {
        self.end_stroke();
        let result = self.stack.toggle_visibility(index);
        let visible = self.guarded("Toggle visibility", result)?;
        let description = if visible { "Show layer" } else { "Hide layer" };
        self.push_snapshot(description, OperationType::Layers);
        Ok(visible)
    }

    /// Make a layer the drawing target; not recorded
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        let result = self.stack.set_active(index);
        self.guarded("Select layer", result)
    }

    /// Set a layer's opacity, clamped to [0, 1]
    pub fn set_layer_opacity(&mut self, index: usize, opacity: f32) -> Result<()> {
        self.end_stroke();
        let result = self.stack.set_opacity(index, opacity);
        self.guarded("Layer opacity", result)?;
        self.push_snapshot("Layer opacity", OperationType::Layers);
        Ok(())
    }

    pub fn rename_layer(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.end_stroke();
        let result = self.stack.rename(index, name);
        self.guarded("Rename layer", result)?;
        self.push_snapshot("Rename layer", OperationType::Layers);
        Ok(())
    }
}
