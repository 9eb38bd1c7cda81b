//! Clipboard operations for canvas sessions
//!
//! Copy takes the flattened canvas; paste writes into the active layer.

use crate::OperationType;

use super::CanvasSession;

impl CanvasSession {
    /// Copy the composited canvas into the clipboard
    pub fn copy(&mut self) {
        self.clipboard.store(crate::composite(&self.stack));
    }

    /// Paste the clipboard onto the active layer
    ///
    /// Returns false (and records nothing) when the clipboard is empty.
    pub fn paste(&mut self) -> bool {
        if !self.clipboard.has_content() {
            return false;
        }
        self.end_stroke();
        if !self.clipboard.paste_into(self.stack.active_grid_mut()) {
            return false;
        }
        self.push_snapshot("Paste", OperationType::Clipboard);
        true
    }

    pub fn has_clipboard_content(&self) -> bool {
        self.clipboard.has_content()
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }
}
