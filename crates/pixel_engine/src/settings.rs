//! Persisted editor defaults
//!
//! Stored as `settings.toml` in the platform config directory. Missing keys
//! fall back to their defaults so older files keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BrushSize, Color, SymmetryMode, DEFAULT_CANVAS_SIZE, MAX_HISTORY};

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Can't serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Edge length of new canvases
    pub canvas_size: usize,
    pub brush_size: BrushSize,
    pub symmetry: SymmetryMode,
    /// Initial drawing color
    pub color: Color,
    /// Bound of each of the undo and redo stacks
    pub history_limit: usize,
    /// Edge length of exported PNGs in pixels
    pub export_resolution: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            brush_size: BrushSize::default(),
            symmetry: SymmetryMode::None,
            color: Color::BLACK,
            history_limit: MAX_HISTORY,
            export_resolution: 512,
        }
    }
}

impl EditorSettings {
    /// Path of the settings file in the platform config directory
    pub fn settings_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pixel_studio").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let txt = fs::read_to_string(path)?;
        Ok(toml::from_str(&txt)?)
    }

    pub fn store_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = toml::to_string(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Load from the config directory, falling back to defaults
    pub fn load() -> Self {
        let Some(file) = Self::settings_file() else {
            return Self::default();
        };
        if !file.exists() {
            return Self::default();
        }
        match Self::load_from(&file) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Error reading settings file {}: {}", file.display(), err);
                Self::default()
            }
        }
    }

    /// Write to the config directory; errors are logged
    pub fn store(&self) {
        let Some(file) = Self::settings_file() else {
            log::error!("Can't determine configuration directory");
            return;
        };
        if let Err(err) = self.store_to(&file) {
            log::error!("Error writing settings file {}: {}", file.display(), err);
        }
    }
}
