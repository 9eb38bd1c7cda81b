//! Unified error types for pixel_engine

use thiserror::Error;

/// Main error type for canvas operations
///
/// Every variant is raised before any state is touched, so a failed call
/// leaves the session exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("Unsupported canvas size: {size}")]
    UnsupportedSize { size: usize },

    #[error("Invalid color: '{value}'")]
    InvalidColor { value: String },

    #[error("Invalid brush size: {size} (expected 1..=3)")]
    InvalidBrushSize { size: u8 },

    #[error("Invalid layer index: {index} (layer count {count})")]
    InvalidLayerIndex { index: usize, count: usize },

    #[error("Cannot delete the last remaining layer")]
    LastLayer,

    #[error("Layer {index} cannot be moved {direction}")]
    LayerMoveOutOfBounds { index: usize, direction: &'static str },
}

/// Result type alias for canvas operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an invalid layer index error
    pub fn invalid_layer(index: usize, count: usize) -> Self {
        Self::InvalidLayerIndex { index, count }
    }

    /// Returns true for conditions that reject an operation to protect a
    /// layer stack invariant
    pub fn is_invariant_guard(&self) -> bool {
        matches!(
            self,
            EngineError::LastLayer | EngineError::LayerMoveOutOfBounds { .. } | EngineError::InvalidLayerIndex { .. }
        )
    }
}
