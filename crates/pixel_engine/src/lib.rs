//! Pixel art editing engine
//!
//! The model layer of a raster pixel editor:
//! - `Grid` / `Layer` / `LayerStack` - the canvas data
//! - `compositor` - flattening visible layers into one grid
//! - `brushes` - brush, flood fill, line, rectangle and circle algorithms
//! - `transform` - flips and rotations
//! - `HistoryManager` - bounded undo/redo snapshots
//! - `CanvasSession` - the state container tying everything together
//!
//! Callers (UI, batch driver) resolve their input to `(row, col)` cells and call
//! into `CanvasSession`; the composited grid is read back for display or export.

mod color;
pub use color::Color;

mod error;
pub use error::{EngineError, Result};

mod grid;
pub use grid::{Grid, Position};

mod layer;
pub use layer::Layer;

mod layer_stack;
pub use layer_stack::{LayerStack, MoveDirection};

pub mod compositor;
pub use compositor::composite;

pub mod brushes;
pub use brushes::{BrushContext, BrushSize, ClipWindow, SymmetryMode};

pub mod tools;
pub use tools::{ShapeState, Tool, ToolOutcome};

pub mod transform;
pub use transform::Transform;

mod history;
pub use history::{HistoryManager, HistorySnapshot, OperationType};

mod clipboard;
pub use clipboard::Clipboard;

mod session;
pub use session::{CanvasSession, SharedSession, UndoState};

pub mod settings;
pub use settings::{EditorSettings, SettingsError};

pub mod export;
pub use export::{ExportError, ExportOptions};

/// Canvas sizes a session can be created with or resized to
pub const SUPPORTED_SIZES: [usize; 3] = [16, 32, 64];

/// Canvas size used when nothing else is configured
pub const DEFAULT_CANVAS_SIZE: usize = 32;

/// Maximum number of entries kept on each of the undo and redo stacks
pub const MAX_HISTORY: usize = 50;

/// Returns true if `size` is one of [`SUPPORTED_SIZES`]
pub fn is_supported_size(size: usize) -> bool {
    SUPPORTED_SIZES.contains(&size)
}
