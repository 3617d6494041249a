//! The icon generation run.

use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::color::{BrandColor, BrandPalette};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::icon::{ICONS, IconSpec};
use crate::render::{IconContentRenderer, PlantRenderer, RenderMode, SourceImageRenderer};

// ============================================================================
// GenerationReport
// ============================================================================

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// The files a successful run produced, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationReport {
    /// Number of files written.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// True when no icon was written.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Written file paths, in generation order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.icons.iter().map(|icon| icon.path.as_path())
    }
}

// ============================================================================
// IconGenerator
// ============================================================================

/// Composes every supported icon with one content renderer and writes them
/// as PNG files.
///
/// # Example
///
/// ```no_run
/// use pwa_icon_forge::{GeneratorConfig, IconGenerator, RenderMode};
///
/// let config = GeneratorConfig::new().with_mode(RenderMode::Procedural);
/// let report = IconGenerator::from_config(&config)?.run()?;
/// println!("wrote {} icons", report.len());
/// # Ok::<(), pwa_icon_forge::GenerateError>(())
/// ```
pub struct IconGenerator {
    renderer: Box<dyn IconContentRenderer>,
    background: BrandColor,
    output_dir: PathBuf,
}

impl IconGenerator {
    /// Creates a generator over the built-in icon table.
    pub fn new(
        renderer: Box<dyn IconContentRenderer>,
        palette: BrandPalette,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            background: palette.background,
            output_dir: output_dir.into(),
        }
    }

    /// Builds the renderer selected by `config.mode`.
    ///
    /// In source mode the asset is loaded here, so a missing file fails
    /// with [`GenerateError::MissingAsset`] before anything is written.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let palette = config.palette();
        let renderer: Box<dyn IconContentRenderer> = match config.mode {
            RenderMode::Source => Box::new(SourceImageRenderer::load(&config.source)?),
            RenderMode::Procedural => Box::new(PlantRenderer::new(palette)),
        };
        Ok(Self::new(renderer, palette, &config.output_dir))
    }

    /// The specs this generator's renderer will produce, in order.
    pub fn planned(&self) -> impl Iterator<Item = &IconSpec> {
        ICONS.iter().filter(|spec| self.renderer.supports(spec))
    }

    /// Composes a single icon in memory.
    pub fn compose(&self, spec: &IconSpec) -> Result<Canvas> {
        let mut canvas = Canvas::new(spec.size, self.background);
        let region = spec.drawable_region();
        tracing::debug!(
            name = spec.name,
            x = region.x,
            y = region.y,
            edge = region.width,
            "drawable region"
        );
        self.renderer.render(&mut canvas, region)?;
        Ok(canvas)
    }

    /// Generates every planned icon, stopping at the first failure.
    ///
    /// Files written before a failure are left on disk.
    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!("generating PWA icons");

        std::fs::create_dir_all(&self.output_dir).map_err(|source| GenerateError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut report = GenerationReport::default();
        for spec in self.planned() {
            let canvas = self.compose(spec)?;
            let path = self.output_dir.join(spec.name);
            canvas.save_png(&path, self.renderer.flattens_alpha())?;

            tracing::info!(
                name = spec.name,
                size = spec.size,
                maskable = spec.maskable,
                "generated icon"
            );
            report.icons.push(GeneratedIcon { spec: *spec, path });
        }

        tracing::info!(
            count = report.len(),
            dir = %self.output_dir.display(),
            "all icons generated successfully"
        );
        Ok(report)
    }
}

/// Runs the generator described by `config`.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    IconGenerator::from_config(config)?.run()
}

// ============================================================================
// Tests
// ============================================================================
