//! Content renderers.
//!
//! A content renderer paints the drawable region of a freshly allocated
//! [`Canvas`]. Two interchangeable renderers exist:
//!
//! - [`SourceImageRenderer`] resizes a source asset into the region and
//!   pastes it using the asset's alpha as mask.
//! - [`PlantRenderer`] draws a small plant glyph from flat primitives.
//!
//! One renderer is chosen per run through [`RenderMode`]; it never changes
//! between icons.

pub mod plant;
pub mod raster;
pub mod source;

pub use plant::{PlantLayout, PlantRenderer};
pub use source::SourceImageRenderer;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::Result;
use crate::icon::{IconSpec, RectPx};

/// Paints icon content into a canvas region.
pub trait IconContentRenderer {
    /// Draws content into `region` of `canvas`.
    ///
    /// Implementations must leave pixels outside `region` untouched.
    fn render(&self, canvas: &mut Canvas, region: RectPx) -> Result<()>;

    /// Whether this renderer produces the given icon at all.
    fn supports(&self, spec: &IconSpec) -> bool {
        !spec.procedural_only
    }

    /// Whether alpha is dropped before encoding.
    fn flattens_alpha(&self) -> bool {
        false
    }
}

/// Which content renderer a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Resize the source asset into every icon.
    #[default]
    Source,
    /// Draw the plant glyph; needs no source asset.
    Procedural,
}

impl RenderMode {
    /// The name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Procedural => "procedural",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&RenderMode::Procedural).unwrap(), "\"procedural\"");
        let mode: RenderMode = serde_json::from_str("\"source\"").unwrap();
        assert_eq!(mode, RenderMode::Source);
        assert_eq!(RenderMode::default(), RenderMode::Source);
    }
}
