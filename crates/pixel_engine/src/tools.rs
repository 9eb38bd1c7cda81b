//! Tool definitions for pixel editing
//!
//! Tools are a closed set dispatched in one place, `CanvasSession::apply_tool`.
//! Shape tools (line, rectangle, circle) work in two clicks: the first one is
//! remembered in [`ShapeState`], the second one draws.

use crate::{Color, Position};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Paint with the current color, size and symmetry
    #[default]
    Brush,
    /// Brush that clears cells
    Eraser,
    /// Flood fill a 4-connected area
    Fill,
    /// Pick a color from the composited canvas
    Eyedropper,
    Line,
    /// Filled rectangle
    Rectangle,
    /// Circle ring
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Fill,
        Tool::Eyedropper,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
    ];

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Eyedropper => "Eyedropper",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }

    /// Get the keyboard shortcut
    pub fn shortcut(&self) -> char {
        match self {
            Tool::Brush => 'b',
            Tool::Eraser => 'e',
            Tool::Fill => 'f',
            Tool::Eyedropper => 'i',
            Tool::Line => 'l',
            Tool::Rectangle => 'r',
            Tool::Circle => 'o',
        }
    }

    /// Look a tool up by its name (case insensitive) or shortcut
    pub fn from_name(name: &str) -> Option<Tool> {
        let name = name.trim();
        Tool::ALL.into_iter().find(|tool| {
            tool.name().eq_ignore_ascii_case(name) || (name.len() == 1 && name.starts_with(tool.shortcut()))
        })
    }

    /// Check if this tool needs two clicks
    pub fn is_shape_tool(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Circle)
    }

    /// Check if this tool paints with the brush stamp (and takes part in strokes)
    pub fn is_brush_tool(&self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }

    /// Check if this tool mutates the canvas
    pub fn changes_data(&self) -> bool {
        !matches!(self, Tool::Eyedropper)
    }
}

/// Pending-point state of the two-click shape tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeState {
    #[default]
    Idle,
    /// First click recorded, waiting for the end point
    AwaitingEnd(Position),
}

impl ShapeState {
    pub fn pending(&self) -> Option<Position> {
        match self {
            ShapeState::Idle => None,
            ShapeState::AwaitingEnd(pos) => Some(*pos),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ShapeState::Idle)
    }
}

/// Result of applying a tool to a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Nothing changed (e.g. filling with the color already present)
    Unchanged,
    /// The active layer was modified
    Painted,
    /// A shape start point was recorded
    Pending(Position),
    /// The eyedropper read this composited color
    Picked(Option<Color>),
}

impl ToolOutcome {
    pub fn is_painted(&self) -> bool {
        matches!(self, ToolOutcome::Painted)
    }
}
