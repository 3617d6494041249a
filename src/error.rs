//! Error taxonomy for icon generation.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Everything that can abort a generation run.
///
/// [`GenerateError::MissingAsset`] is raised before any file is written.
/// Every other variant is a generation failure: the run stops at the icon
/// that failed and files written before it stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The source image required by the source-image renderer does not exist.
    #[error("source image not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    /// The source image exists but could not be decoded.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An SVG source could not be parsed or rasterized.
    #[error("failed to render SVG {}: {reason}", path.display())]
    Svg { path: PathBuf, reason: String },

    /// PNG encoding of a finished canvas failed.
    #[error("failed to encode {name}")]
    Encode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// A filesystem operation failed.
    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawable region of an icon is empty or cannot be allocated.
    #[error("invalid drawable region {width}x{height}")]
    InvalidRegion { width: u32, height: u32 },

    /// A configuration file could not be parsed.
    #[error("invalid configuration")]
    Config(#[from] serde_json::Error),

    /// A brand color string is not a valid `#RRGGBB` hex color.
    #[error("invalid color {value:?}")]
    InvalidColor { value: String },
}

impl GenerateError {
    /// Returns true for the error raised before any output is produced.
    pub fn is_missing_asset(&self) -> bool {
        matches!(self, Self::MissingAsset { .. })
    }
}
