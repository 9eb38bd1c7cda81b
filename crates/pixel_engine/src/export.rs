//! PNG export of a composited canvas
//!
//! Each cell becomes a solid square block. Cells are alpha-composited over an
//! opaque background, so the written image never carries transparency.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::{Color, Grid};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("Resolution {resolution} is too small for a {size}x{size} canvas")]
    InvalidResolution { resolution: u32, size: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportOptions {
    /// Target edge length in pixels; rounded down to a multiple of the canvas size
    pub resolution: u32,
    pub background: Color,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            resolution: 512,
            background: Color::WHITE,
        }
    }
}

impl ExportOptions {
    pub fn with_resolution(resolution: u32) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }
}

/// Square RGBA8 image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    pub size: u32,
    pub data: Vec<u8>,
}

/// Edge length of one cell block in pixels
pub fn cell_size(grid: &Grid, options: &ExportOptions) -> Result<u32, ExportError> {
    let cell = options.resolution / grid.size() as u32;
    if cell == 0 {
        return Err(ExportError::InvalidResolution {
            resolution: options.resolution,
            size: grid.size(),
        });
    }
    Ok(cell)
}

/// Rasterize `grid` into an RGBA8 buffer
pub fn render_rgba(grid: &Grid, options: &ExportOptions) -> Result<RenderedImage, ExportError> {
    let cell = cell_size(grid, options)? as usize;
    let size = cell * grid.size();
    let background = Color { a: 0xFF, ..options.background };

    let mut data = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        let row = (y / cell) as i32;
        for x in 0..size {
            let col = (x / cell) as i32;
            let pixel = match grid.get(row, col) {
                Some(color) => color.over(background),
                None => background,
            };
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
    }

    Ok(RenderedImage { size: size as u32, data })
}

/// Encode `grid` as PNG into `writer`
pub fn write_png<W: Write>(writer: W, grid: &Grid, options: &ExportOptions) -> Result<(), ExportError> {
    let image = render_rgba(grid, options)?;

    let mut encoder = png::Encoder::new(writer, image.size, image.size);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;
    Ok(())
}

/// Write `grid` as a PNG file
pub fn save_png(path: &Path, grid: &Grid, options: &ExportOptions) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_png(BufWriter::new(file), grid, options)?;
    log::info!("Exported {}", path.display());
    Ok(())
}
