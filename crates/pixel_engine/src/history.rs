//! Bounded undo/redo history of layer stack snapshots
//!
//! The top of the undo stack always mirrors the current canvas. Undo moves
//! that top entry to the redo stack and restores the one below it; redo moves
//! it back. Both stacks drop their oldest entry once over the limit.

use std::collections::VecDeque;

use crate::{LayerStack, MAX_HISTORY};

/// Type of operation that produced a snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OperationType {
    /// Unknown/default operation
    #[default]
    Unknown,
    /// Pixel editing (tools, clear)
    EditPixels,
    /// Flip or rotation
    Transform,
    /// Layer structure or metadata
    Layers,
    /// Canvas resize
    Resize,
    /// Paste
    Clipboard,
}

/// Deep copy of the whole layer stack after an operation
#[derive(Clone, Debug, PartialEq)]
pub struct HistorySnapshot {
    description: String,
    operation_type: OperationType,
    stack: LayerStack,
}

impl HistorySnapshot {
    pub fn new(description: impl Into<String>, operation_type: OperationType, stack: LayerStack) -> Self {
        Self {
            description: description.into(),
            operation_type,
            stack,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }
}

#[derive(Clone, Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistorySnapshot>,
    redo_stack: VecDeque<HistorySnapshot>,
    limit: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl HistoryManager {
    /// Smallest usable limit: one entry for the current state plus one to undo to
    pub const MIN_LIMIT: usize = 2;

    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit: limit.max(Self::MIN_LIMIT),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the bound, dropping the oldest entries of both stacks if needed
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(Self::MIN_LIMIT);
        Self::trim(&mut self.undo_stack, self.limit);
        Self::trim(&mut self.redo_stack, self.limit);
    }

    fn trim(stack: &mut VecDeque<HistorySnapshot>, limit: usize) {
        while stack.len() > limit {
            if let Some(evicted) = stack.pop_front() {
                log::debug!("history full, dropping '{}'", evicted.description);
            }
        }
    }

    /// Push a new snapshot; clears the redo stack
    pub fn record(&mut self, snapshot: HistorySnapshot) {
        self.undo_stack.push_back(snapshot);
        Self::trim(&mut self.undo_stack, self.limit);
        self.redo_stack.clear();
    }

    /// Step back; returns the snapshot to restore
    ///
    /// `None` when only the current state is left on the undo stack.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let top = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(top);
        Self::trim(&mut self.redo_stack, self.limit);
        self.undo_stack.back()
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        let snapshot = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(snapshot);
        Self::trim(&mut self.undo_stack, self.limit);
        self.undo_stack.back()
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Drop all history and start over from `snapshot`
    pub fn reset(&mut self, snapshot: HistorySnapshot) {
        self.clear();
        self.undo_stack.push_back(snapshot);
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the operation the next undo reverts
    pub fn undo_description(&self) -> Option<String> {
        if !self.can_undo() {
            return None;
        }
        self.undo_stack.back().map(|s| s.description.clone())
    }

    /// Description of the operation the next redo reapplies
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(|s| s.description.clone())
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshot mirroring the current state, if any
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.undo_stack.back()
    }
}
