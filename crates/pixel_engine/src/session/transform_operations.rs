//! Canvas-level operations for canvas sessions
//!
//! - Flip and rotate the active layer
//! - Resize every layer
//! - Clear the active layer

use crate::{is_supported_size, EngineError, HistorySnapshot, OperationType, Result, ShapeState, Transform};

use super::CanvasSession;

impl CanvasSession {
    /// Replace the active layer's grid with its transformed copy
    pub fn apply_transform(&mut self, transform: Transform) {
        self.end_stroke();
        let transformed = transform.apply(self.stack.active_grid());
        self.stack.replace_active_grid(transformed);
        self.push_snapshot(transform.description(), OperationType::Transform);
    }

    /// Mirror the active layer left/right
    pub fn flip_h(&mut self) {
        self.apply_transform(Transform::FlipHorizontal);
    }

    /// Mirror the active layer top/bottom
    pub fn flip_v(&mut self) {
        self.apply_transform(Transform::FlipVertical);
    }

    /// Rotate the active layer by `quarter_turns` clockwise quarter turns
    ///
    /// Negative values rotate counter-clockwise. Full turns are a no-op and
    /// aren't recorded.
    pub fn rotate(&mut self, quarter_turns: i32) {
        if let Some(transform) = Transform::from_quarter_turns(quarter_turns) {
            self.apply_transform(transform);
        }
    }

    /// Resize every layer to `new_size × new_size`, keeping the top-left region
    ///
    /// History is reset to the resized canvas; cropped cells can't be
    /// recovered. A pending shape start is dropped, the clipboard is kept.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if !is_supported_size(new_size) {
            log::warn!("Resize rejected: unsupported size {}", new_size);
            return Err(EngineError::UnsupportedSize { size: new_size });
        }
        if new_size == self.size() {
            return Ok(());
        }
        self.end_stroke();

        log::debug!("Resizing canvas {} -> {}", self.size(), new_size);
        self.stack.resize(new_size);
        self.shape_state = ShapeState::Idle;
        self.history.reset(HistorySnapshot::new(
            format!("Resize to {new_size}x{new_size}"),
            OperationType::Resize,
            self.stack.clone(),
        ));
        self.is_dirty = true;
        Ok(())
    }

    /// Erase every cell of the active layer
    pub fn clear_active_layer(&mut self) {
        self.end_stroke();
        self.stack.active_grid_mut().clear();
        self.push_snapshot("Clear layer", OperationType::EditPixels);
    }
}
