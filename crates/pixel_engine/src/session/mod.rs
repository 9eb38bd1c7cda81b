//! Canvas session module structure
//!
//! Split into multiple files by category:
//! - `state.rs` - Struct definition, constructors, getters, tool settings
//! - `tool_operations.rs` - Tool dispatch and brush strokes
//! - `layer_operations.rs` - Add, delete, reorder and layer metadata
//! - `transform_operations.rs` - Flip, rotate, resize, clear
//! - `clipboard.rs` - Copy and paste
//! - `undo.rs` - Snapshot recording and undo/redo

mod clipboard;
mod layer_operations;
mod state;
mod tool_operations;
mod transform_operations;
mod undo;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::Result;

pub use state::CanvasSession;

/// A session shared between an edit thread and render/export readers
pub type SharedSession = Arc<RwLock<CanvasSession>>;

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}
