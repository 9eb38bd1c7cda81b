//! Line based command scripts
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! color #ff0000
//! brush 2
//! symmetry vertical
//! stroke 0 0 4 4 4 8
//! tool rectangle
//! click 10 10
//! click 14 14
//! layer add
//! export out.png
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use pixel_engine::brushes::line::get_line_points;
use pixel_engine::export::{self, ExportOptions};
use pixel_engine::{CanvasSession, ClipWindow, Color, MoveDirection, Position, SymmetryMode, Tool, UndoState};

#[derive(Clone, Debug, PartialEq)]
pub enum LayerCommand {
    Add,
    Delete(usize),
    Move(usize, MoveDirection),
    Toggle(usize),
    Select(usize),
    Opacity(usize, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Tool(Tool),
    Color(Color),
    /// Shorthand for `tool eraser`
    Erase,
    Brush(u8),
    Symmetry(SymmetryMode),
    /// Apply the current tool at one cell
    Click(Position),
    /// Brush drag through the listed cells, recorded as one undo step
    Stroke(Vec<Position>),
    Layer(LayerCommand),
    FlipHorizontal,
    FlipVertical,
    Rotate(i32),
    Resize(usize),
    Clear,
    Copy,
    Paste,
    Undo,
    Redo,
    Export(PathBuf),
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<T> {
    let word = word.ok_or_else(|| anyhow!("missing {what}"))?;
    word.parse().map_err(|_| anyhow!("invalid {what} '{word}'"))
}

fn parse_symmetry(word: &str) -> Result<SymmetryMode> {
    Ok(match word.to_ascii_lowercase().as_str() {
        "none" | "off" => SymmetryMode::None,
        "horizontal" | "h" => SymmetryMode::Horizontal,
        "vertical" | "v" => SymmetryMode::Vertical,
        "both" => SymmetryMode::Both,
        _ => bail!("unknown symmetry mode '{word}'"),
    })
}

fn parse_layer<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<LayerCommand> {
    let action = words.next().ok_or_else(|| anyhow!("missing layer action"))?;
    let command = match action {
        "add" => LayerCommand::Add,
        "delete" => LayerCommand::Delete(parse_number(words.next(), "layer index")?),
        "up" => LayerCommand::Move(parse_number(words.next(), "layer index")?, MoveDirection::Up),
        "down" => LayerCommand::Move(parse_number(words.next(), "layer index")?, MoveDirection::Down),
        "toggle" => LayerCommand::Toggle(parse_number(words.next(), "layer index")?),
        "select" => LayerCommand::Select(parse_number(words.next(), "layer index")?),
        "opacity" => {
            let index = parse_number(words.next(), "layer index")?;
            LayerCommand::Opacity(index, parse_number(words.next(), "opacity")?)
        }
        _ => bail!("unknown layer action '{action}'"),
    };
    Ok(command)
}

/// Parse a single line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut tokens: Vec<&str> = Vec::new();
    for word in line.split_whitespace() {
        // `#` after `color` is a hex literal, anywhere else it starts a comment
        let is_color_literal = tokens.last().is_some_and(|last| last.eq_ignore_ascii_case("color"));
        if word.starts_with('#') && !is_color_literal {
            break;
        }
        tokens.push(word);
    }
    let mut words = tokens.into_iter();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "tool" => {
            let name = words.next().ok_or_else(|| anyhow!("missing tool name"))?;
            Command::Tool(Tool::from_name(name).ok_or_else(|| anyhow!("unknown tool '{name}'"))?)
        }
        "color" => {
            let value = words.next().ok_or_else(|| anyhow!("missing color"))?;
            Command::Color(value.parse()?)
        }
        "erase" => Command::Erase,
        "brush" => Command::Brush(parse_number(words.next(), "brush size")?),
        "symmetry" => Command::Symmetry(parse_symmetry(words.next().ok_or_else(|| anyhow!("missing symmetry mode"))?)?),
        "click" => {
            let row = parse_number(words.next(), "row")?;
            Command::Click(Position::new(row, parse_number(words.next(), "column")?))
        }
        "stroke" => {
            let coords = words.by_ref().map(|w| parse_number::<i32>(Some(w), "coordinate")).collect::<Result<Vec<_>>>()?;
            if coords.is_empty() || coords.len() % 2 != 0 {
                bail!("stroke needs row/column pairs");
            }
            Command::Stroke(coords.chunks(2).map(|c| Position::new(c[0], c[1])).collect())
        }
        "layer" => Command::Layer(parse_layer(words.by_ref())?),
        "flip" => match words.next() {
            Some("h") | Some("horizontal") => Command::FlipHorizontal,
            Some("v") | Some("vertical") => Command::FlipVertical,
            other => bail!("flip needs 'h' or 'v', got {:?}", other.unwrap_or("")),
        },
        "rotate" => Command::Rotate(parse_number(words.next(), "quarter turns")?),
        "resize" => Command::Resize(parse_number(words.next(), "size")?),
        "clear" => Command::Clear,
        "copy" => Command::Copy,
        "paste" => Command::Paste,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "export" => Command::Export(PathBuf::from(words.next().ok_or_else(|| anyhow!("missing export path"))?)),
        _ => bail!("unknown command '{keyword}'"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(Some(command))
}

/// Parse a whole script, keeping the 1-based line number of every command
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        if let Some(command) = parse_line(line).with_context(|| format!("line {line_number}: '{}'", line.trim()))? {
            commands.push((line_number, command));
        }
    }
    Ok(commands)
}

/// Executes commands against a session
pub struct Runner {
    pub session: CanvasSession,
    pub export_options: ExportOptions,
}

impl Runner {
    pub fn new(session: CanvasSession, export_options: ExportOptions) -> Self {
        Self { session, export_options }
    }

    pub fn run(&mut self, commands: &[(usize, Command)]) -> Result<()> {
        for (line_number, command) in commands {
            self.execute(command).with_context(|| format!("line {line_number}: {command:?} failed"))?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &Command) -> Result<()> {
        let session = &mut self.session;
        match command {
            Command::Tool(tool) => session.set_tool(*tool),
            Command::Color(color) => {
                session.set_color(*color);
                if session.tool() == Tool::Eraser {
                    session.set_tool(Tool::Brush);
                }
            }
            Command::Erase => session.set_tool(Tool::Eraser),
            Command::Brush(size) => session.set_brush_size(*size)?,
            Command::Symmetry(mode) => session.set_symmetry(*mode),
            Command::Click(pos) => {
                let outcome = session.apply_tool(pos.row, pos.col)?;
                log::debug!("{} at ({}, {}): {:?}", session.tool().name(), pos.row, pos.col, outcome);
            }
            Command::Stroke(points) => {
                if !session.tool().is_brush_tool() {
                    session.set_tool(Tool::Brush);
                }
                // the 3x3 brush reaches one cell past its center
                let clip = ClipWindow::grid(session.size()).expand(1);
                session.begin_stroke();
                let mut last: Option<Position> = None;
                for &point in points {
                    let segment = match last {
                        Some(prev) => get_line_points(prev, point, clip).into_iter().filter(|cell| *cell != prev).collect(),
                        None => vec![point],
                    };
                    for cell in segment {
                        session.apply_tool(cell.row, cell.col)?;
                    }
                    last = Some(point);
                }
                session.end_stroke();
            }
            Command::Layer(layer) => match layer {
                LayerCommand::Add => {
                    session.add_layer();
                }
                LayerCommand::Delete(index) => session.delete_layer(*index)?,
                LayerCommand::Move(index, direction) => {
                    session.move_layer(*index, *direction)?;
                }
                LayerCommand::Toggle(index) => {
                    session.toggle_visibility(*index)?;
                }
                LayerCommand::Select(index) => session.set_active(*index)?,
                LayerCommand::Opacity(index, opacity) => session.set_layer_opacity(*index, *opacity)?,
            },
            Command::FlipHorizontal => session.flip_h(),
            Command::FlipVertical => session.flip_v(),
            Command::Rotate(turns) => session.rotate(*turns),
            Command::Resize(size) => session.resize(*size)?,
            Command::Clear => session.clear_active_layer(),
            Command::Copy => session.copy(),
            Command::Paste => {
                if !session.paste() {
                    log::warn!("paste: clipboard is empty");
                }
            }
            Command::Undo => session.undo()?,
            Command::Redo => session.redo()?,
            Command::Export(path) => export::save_png(path, &session.composite(), &self.export_options)?,
        }
        Ok(())
    }
}
