//! Canvas Session
//!
//! The state container for one canvas. It owns the layer stack, the history,
//! the clipboard and the tool settings; callers only read from it and call its
//! methods to change it.
//!
//! # Undo/Redo
//!
//! Every completed operation that changes the canvas pushes exactly one
//! snapshot of the whole layer stack:
//! - Tools record when they finish (shape tools on the second click)
//! - Brush drags wrapped in `begin_stroke()`/`end_stroke()` record once
//! - Resize drops the history and starts over from the resized canvas
//!
//! The eyedropper, `set_active` and clipboard `copy` don't record.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    is_supported_size, BrushContext, BrushSize, Clipboard, Color, EditorSettings, EngineError, Grid, HistoryManager, HistorySnapshot, Layer,
    LayerStack, OperationType, Result, ShapeState, SymmetryMode, Tool,
};

use super::SharedSession;

/// Open brush drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Stroke {
    pub tool: Tool,
    pub painted: bool,
}

#[derive(Debug, Clone)]
pub struct CanvasSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Canvas Data
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) stack: LayerStack,

    pub(crate) clipboard: Clipboard,

    // ═══════════════════════════════════════════════════════════════════════
    // Tool State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) tool: Tool,

    /// Drawing color for brush, fill and shapes
    pub(crate) color: Color,

    pub(crate) brush_size: BrushSize,

    pub(crate) symmetry: SymmetryMode,

    /// Pending start point of a two-click shape
    pub(crate) shape_state: ShapeState,

    pub(crate) stroke: Option<Stroke>,

    // ═══════════════════════════════════════════════════════════════════════
    // Undo System
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) history: HistoryManager,

    /// Whether the canvas changed since the last `mark_saved`
    pub(crate) is_dirty: bool,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::with_stack(LayerStack::new(crate::DEFAULT_CANVAS_SIZE), HistoryManager::default())
    }
}

impl CanvasSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session with one empty layer of `size × size` cells
    pub fn new(size: usize) -> Result<Self> {
        if !is_supported_size(size) {
            return Err(EngineError::UnsupportedSize { size });
        }
        Ok(Self::with_stack(LayerStack::new(size), HistoryManager::default()))
    }

    /// Create a session using the canvas size, tool defaults and history limit from `settings`
    pub fn with_settings(settings: &EditorSettings) -> Result<Self> {
        if !is_supported_size(settings.canvas_size) {
            return Err(EngineError::UnsupportedSize { size: settings.canvas_size });
        }
        let mut session = Self::with_stack(LayerStack::new(settings.canvas_size), HistoryManager::new(settings.history_limit));
        session.color = settings.color;
        session.brush_size = settings.brush_size;
        session.symmetry = settings.symmetry;
        Ok(session)
    }

    fn with_stack(stack: LayerStack, mut history: HistoryManager) -> Self {
        history.reset(HistorySnapshot::new("New canvas", OperationType::Unknown, stack.clone()));
        Self {
            stack,
            clipboard: Clipboard::new(),
            tool: Tool::default(),
            color: Color::BLACK,
            brush_size: BrushSize::default(),
            symmetry: SymmetryMode::None,
            shape_state: ShapeState::Idle,
            stroke: None,
            history,
            is_dirty: false,
        }
    }

    /// Wrap the session for sharing across threads
    pub fn into_shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// Canvas edge length in cells
    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn layer_stack(&self) -> &LayerStack {
        &self.stack
    }

    pub fn layers(&self) -> &[Layer] {
        self.stack.layers()
    }

    pub fn layer_count(&self) -> usize {
        self.stack.len()
    }

    pub fn active_index(&self) -> usize {
        self.stack.active_index()
    }

    pub fn active_layer(&self) -> &Layer {
        self.stack.active_layer()
    }

    pub fn active_grid(&self) -> &Grid {
        self.stack.active_grid()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn symmetry(&self) -> SymmetryMode {
        self.symmetry
    }

    pub fn shape_state(&self) -> ShapeState {
        self.shape_state
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Clear the dirty flag
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    /// Flatten all visible layers
    pub fn composite(&self) -> Grid {
        crate::composite(&self.stack)
    }

    /// Composited color of a single cell
    pub fn composite_pixel(&self, row: i32, col: i32) -> Option<Color> {
        crate::compositor::composite_pixel(&self.stack, row, col)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tool Settings
    // ═══════════════════════════════════════════════════════════════════════

    /// Select a tool; switching to a different tool drops a pending shape start
    /// Switch tools
    ///
    /// An open stroke is committed under the tool that painted it, and stays
    /// open for the new tool if that one also stamps.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.shape_state = ShapeState::Idle;
        let stroke_open = self.stroke.is_some();
        self.end_stroke();
        self.tool = tool;
        if stroke_open && tool.is_brush_tool() {
            self.begin_stroke();
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_brush_size(&mut self, size: u8) -> Result<()> {
        self.brush_size = BrushSize::new(size)?;
        Ok(())
    }

    pub fn set_symmetry(&mut self, symmetry: SymmetryMode) {
        self.symmetry = symmetry;
    }

    /// Forget a pending shape start
    pub fn cancel_shape(&mut self) {
        self.shape_state = ShapeState::Idle;
    }

    /// Change the history bound
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history.set_limit(limit);
    }

    /// Brush context for painting with the current settings
    ///
    /// `erase` paints `None` instead of the current color.
    pub(crate) fn brush_context(&self, erase: bool) -> BrushContext {
        let color = if erase { None } else { Some(self.color) };
        BrushContext::new(color).with_size(self.brush_size).with_symmetry(self.symmetry)
    }
}
