//! Serializable generator configuration.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) reproduces the built-in setup:
//!
//! ```json
//! {
//!   "outputDir": "public",
//!   "source": "public/organic.gif",
//!   "mode": "source",
//!   "colors": {
//!     "background": "#88B04B",
//!     "leaf": "#2E7D32",
//!     "stem": "#1B5E20"
//!   }
//! }
//! ```
//!
//! `colors.accent` may be added to override the color derived from `leaf`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{BrandColor, BrandPalette};
use crate::error::{GenerateError, Result};
use crate::render::RenderMode;

/// Default directory icons are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Default source asset for the source-image renderer.
pub const DEFAULT_SOURCE: &str = "public/organic.gif";

/// Serializable brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    pub background: BrandColor,
    pub leaf: BrandColor,
    pub stem: BrandColor,

    /// Top leaf color; derived from `leaf` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<BrandColor>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: BrandPalette::BACKGROUND,
            leaf: BrandPalette::LEAF,
            stem: BrandPalette::STEM,
            accent: None,
        }
    }
}

impl From<&ColorSettings> for BrandPalette {
    fn from(colors: &ColorSettings) -> Self {
        let palette = BrandPalette::new(colors.background, colors.leaf, colors.stem);
        match colors.accent {
            Some(accent) => palette.with_accent(accent),
            None => palette,
        }
    }
}

/// Everything a generation run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Directory the PNG files are written into.
    pub output_dir: PathBuf,

    /// Source asset used by [`RenderMode::Source`].
    pub source: PathBuf,

    /// Which content renderer the run uses.
    pub mode: RenderMode,

    pub colors: ColorSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            source: PathBuf::from(DEFAULT_SOURCE),
            mode: RenderMode::default(),
            colors: ColorSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the built-in configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render mode.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the source asset path.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// The palette the renderers paint with.
    pub fn palette(&self) -> BrandPalette {
        BrandPalette::from(&self.colors)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.source, PathBuf::from("public/organic.gif"));
        assert_eq!(config.mode, RenderMode::Source);
        assert_eq!(config.colors.background, BrandPalette::BACKGROUND);
    }

    #[test]
    fn config_json_format() {
        let json = GeneratorConfig::new()
            .with_mode(RenderMode::Procedural)
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"outputDir\""));
        assert!(json.contains("\"procedural\""));
        assert!(json.contains("\"#88B04B\""));
        assert!(!json.contains("\"accent\""));
    }

    #[test]
    fn partial_colors_keep_other_defaults() {
        let config =
            GeneratorConfig::from_json(r##"{"colors": {"leaf": "#00FF00", "accent": "#AAFFAA"}}"##)
                .unwrap();
        let palette = config.palette();

        assert_eq!(palette.background, BrandPalette::BACKGROUND);
        assert_eq!(palette.leaf, BrandColor::new(0, 255, 0));
        assert_eq!(palette.accent, BrandColor::new(0xAA, 0xFF, 0xAA));
    }

    #[test]
    fn bad_color_is_config_error() {
        let err = GeneratorConfig::from_json(r#"{"colors": {"stem": "brown"}}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"mode": "vector"}"#).is_err());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = GeneratorConfig::from_path("no/such/config.json").unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
    }
}
