//! pwa-icon-forge: PWA icon set generator
//!
//! This crate renders the fixed set of Progressive Web App icons (regular,
//! maskable and Apple touch icons) onto a brand-colored background, either
//! from a source image or from a procedurally drawn plant glyph, and writes
//! them as PNG files.
//!
//! # Example
//!
//! ```no_run
//! use pwa_icon_forge::{generate, GeneratorConfig, RenderMode};
//!
//! // Resize public/organic.gif into every icon
//! let report = generate(&GeneratorConfig::default())?;
//! assert_eq!(report.len(), 4);
//!
//! // Draw the plant glyph instead; no source asset needed
//! let config = GeneratorConfig::new().with_mode(RenderMode::Procedural);
//! let report = generate(&config)?;
//! assert_eq!(report.len(), 5);
//! # Ok::<(), pwa_icon_forge::GenerateError>(())
//! ```
//!
//! # Composing without touching the filesystem
//!
//! ```
//! use pwa_icon_forge::{BrandPalette, IconGenerator, PlantRenderer, ICONS};
//!
//! let palette = BrandPalette::default();
//! let generator = IconGenerator::new(Box::new(PlantRenderer::new(palette)), palette, "public");
//!
//! let canvas = generator.compose(&ICONS[0]).unwrap();
//! assert_eq!(canvas.size(), 64);
//! ```

mod canvas;
mod color;
mod config;
mod error;
mod generator;
mod icon;
pub mod render;

pub use canvas::Canvas;
pub use color::{ACCENT_LIFT, BrandColor, BrandPalette};
pub use config::{ColorSettings, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE, GeneratorConfig};
pub use error::{GenerateError, Result};
pub use generator::{GeneratedIcon, GenerationReport, IconGenerator, generate};
pub use icon::{ICONS, IconSpec, RectPx, SAFE_ZONE_RATIO, safe_zone_padding};
pub use render::{
    IconContentRenderer, PlantLayout, PlantRenderer, RenderMode, SourceImageRenderer,
};
