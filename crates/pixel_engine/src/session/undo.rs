//! Undo/Redo system for canvas sessions
//!
//! Snapshots are taken after an operation completes, so the top of the undo
//! stack always equals the live layer stack.

use crate::{HistorySnapshot, OperationType, Result};

use super::{CanvasSession, UndoState};

impl CanvasSession {
    /// Snapshot the current layer stack onto the undo stack
    pub(crate) fn push_snapshot(&mut self, description: impl Into<String>, operation_type: OperationType) {
        self.history.record(HistorySnapshot::new(description, operation_type, self.stack.clone()));
        self.is_dirty = true;
    }

    /// Record the current state as an explicit history entry
    pub fn record_snapshot(&mut self) {
        self.end_stroke();
        self.push_snapshot("Snapshot", OperationType::Unknown);
    }

    /// Get undo stack length
    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Get redo stack length
    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Drop all history, keeping the current state as the only entry
    pub fn clear_history(&mut self) {
        self.stroke = None;
        self.history.reset(HistorySnapshot::new("Clear history", OperationType::Unknown, self.stack.clone()));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for CanvasSession {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.end_stroke();
        let Some(snapshot) = self.history.undo() else {
            return Ok(());
        };
        self.stack = snapshot.stack().clone();
        self.is_dirty = true;
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.end_stroke();
        let Some(snapshot) = self.history.redo() else {
            return Ok(());
        };
        self.stack = snapshot.stack().clone();
        self.is_dirty = true;
        Ok(())
    }
}
