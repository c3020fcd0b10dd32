//! Unified error type for kanban_engine

use thiserror::Error;

/// Main error type for kanban_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Asset Errors ===
    #[error("Font asset '{name}' not found")]
    AssetNotFound { name: String },

    #[error("Failed to read font asset '{name}': {message}")]
    ReadAsset { name: String, message: String },

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    // === Font Errors ===
    #[error("Unknown font '{name}' (expected mincho or gothic)")]
    UnknownFont { name: String },

    #[error("Font sheet '{name}' is {width}x{height} pixels, at least {min_width}x{min_height} required")]
    SheetTooSmall {
        name: String,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    // === Layout Errors ===
    #[error("Banner has no visible columns")]
    EmptyBanner,

    #[error("Surface has no cells ({width}x{height})")]
    EmptySurface { width: i32, height: i32 },

    // === Surface Errors ===
    #[error("Display surface error: {message}")]
    Surface { message: String },
}

/// Result type alias for kanban_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a read error for a named asset
    pub fn read_asset(name: impl Into<String>, msg: impl std::fmt::Display) -> Self {
        Self::ReadAsset {
            name: name.into(),
            message: msg.to_string(),
        }
    }

    /// Create a surface error from any displayable type
    pub fn surface(msg: impl std::fmt::Display) -> Self {
        Self::Surface { message: msg.to_string() }
    }
}
