//! Tool dispatch for canvas sessions
//!
//! High-level drawing operations that use the brush algorithms and support undo:
//! - Brush / eraser stamps, optionally grouped into strokes
//! - Flood fill
//! - Eyedropper
//! - Two-click line, rectangle and circle

use crate::brushes::{circle, fill, line, rectangle};
use crate::{OperationType, Position, Result, ShapeState, Tool, ToolOutcome};

use super::state::Stroke;
use super::CanvasSession;

impl CanvasSession {
    /// Apply the current tool at a cell
    ///
    /// Cells outside the canvas are clipped by the drawing algorithms, so an
    /// off-canvas click never fails.
    pub fn apply_tool(&mut self, row: i32, col: i32) -> Result<ToolOutcome> {
        let pos = Position::new(row, col);
        let outcome = match self.tool {
            Tool::Brush | Tool::Eraser => self.stamp(pos),
            Tool::Fill => self.fill(pos),
            Tool::Eyedropper => self.pick(pos),
            Tool::Line | Tool::Rectangle | Tool::Circle => self.shape_click(pos),
        };
        Ok(outcome)
    }

    /// Select `tool` and apply it at a cell
    pub fn apply(&mut self, tool: Tool, row: i32, col: i32) -> Result<ToolOutcome> {
        self.set_tool(tool);
        self.apply_tool(row, col)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Strokes
    // ═══════════════════════════════════════════════════════════════════════

    /// Start grouping brush/eraser stamps into a single history entry
    pub fn begin_stroke(&mut self) {
        if self.stroke.is_none() {
            self.stroke = Some(Stroke {
                tool: self.tool,
                painted: false,
            });
        }
    }

    /// Close the open stroke, recording it if anything was painted
    ///
    /// Returns true if a history entry was pushed.
    pub fn end_stroke(&mut self) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        if !stroke.painted {
            return false;
        }
        log::debug!("{} stroke finished", stroke.tool.name());
        self.push_snapshot(format!("{} stroke", stroke.tool.name()), OperationType::EditPixels);
        true
    }

    pub fn is_stroke_open(&self) -> bool {
        self.stroke.is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tools
    // ═══════════════════════════════════════════════════════════════════════

    fn stamp(&mut self, pos: Position) -> ToolOutcome {
        let ctx = self.brush_context(self.tool == Tool::Eraser);
        ctx.stamp(self.stack.active_grid_mut(), pos);

        if let Some(stroke) = &mut self.stroke {
            stroke.painted = true;
            self.is_dirty = true;
            return ToolOutcome::Painted;
        }
        self.push_snapshot(self.tool.name(), OperationType::EditPixels);
        ToolOutcome::Painted
    }

    fn fill(&mut self, pos: Position) -> ToolOutcome {
        self.end_stroke();
        let count = fill::flood_fill(self.stack.active_grid_mut(), pos, Some(self.color));
        if count == 0 {
            return ToolOutcome::Unchanged;
        }
        self.push_snapshot(Tool::Fill.name(), OperationType::EditPixels);
        ToolOutcome::Painted
    }

    /// Read the composited color; a hit becomes the drawing color
    fn pick(&mut self, pos: Position) -> ToolOutcome {
        let picked = self.composite_pixel(pos.row, pos.col);
        if let Some(color) = picked {
            self.color = color;
        }
        ToolOutcome::Picked(picked)
    }

    fn shape_click(&mut self, pos: Position) -> ToolOutcome {
        let ShapeState::AwaitingEnd(start) = self.shape_state else {
            self.shape_state = ShapeState::AwaitingEnd(pos);
            return ToolOutcome::Pending(pos);
        };
        self.shape_state = ShapeState::Idle;
        self.end_stroke();

        let ctx = self.brush_context(false);
        let grid = self.stack.active_grid_mut();
        match self.tool {
            Tool::Line => line::draw_line(grid, &ctx, start, pos),
            Tool::Rectangle => rectangle::draw_rectangle(grid, &ctx, start, pos),
            Tool::Circle => circle::draw_circle(grid, &ctx, start, pos),
            _ => return ToolOutcome::Unchanged,
        }
        self.push_snapshot(self.tool.name(), OperationType::EditPixels);
        ToolOutcome::Painted
    }
}
