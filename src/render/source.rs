//! Source-image content renderer.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::FilterType;

use super::IconContentRenderer;
use super::raster::{render_svg, resize_premultiplied};
use crate::canvas::Canvas;
use crate::error::{GenerateError, Result};
use crate::icon::RectPx;

/// A decoded source asset.
#[derive(Debug, Clone)]
enum SourceAsset {
    /// Raster image, resampled per icon.
    Raster(RgbaImage),
    /// SVG document, rasterized per icon at the exact region size.
    Svg(Vec<u8>),
}

/// Resizes one source asset into every icon's drawable region.
///
/// The asset is loaded once in [`SourceImageRenderer::load`]; loading fails
/// with [`GenerateError::MissingAsset`] when the file does not exist, which
/// lets the generator abort before writing anything.
#[derive(Debug, Clone)]
pub struct SourceImageRenderer {
    path: PathBuf,
    asset: SourceAsset,
}

impl SourceImageRenderer {
    /// Loads the source asset at `path`.
    ///
    /// Files with an `.svg` extension are parsed lazily by resvg; anything
    /// else goes through the `image` decoders.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(GenerateError::MissingAsset { path }),
            Err(source) => return Err(GenerateError::Io { path, source }),
        }

        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        let asset = if is_svg {
            let data = std::fs::read(&path).map_err(|source| GenerateError::Io {
                path: path.clone(),
                source,
            })?;
            SourceAsset::Svg(data)
        } else {
            let img = image::open(&path).map_err(|source| GenerateError::Decode {
                path: path.clone(),
                source,
            })?;
            SourceAsset::Raster(img.to_rgba8())
        };

        tracing::debug!(path = %path.display(), svg = is_svg, "loaded source image");

        Ok(Self { path, asset })
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            path: PathBuf::new(),
            asset: SourceAsset::Raster(image),
        }
    }

    /// Produces the asset at exactly `width x height`.
    fn fit(&self, width: u32, height: u32) -> Result<RgbaImage> {
        match &self.asset {
            SourceAsset::Raster(img) if img.dimensions() == (width, height) => Ok(img.clone()),
            SourceAsset::Raster(img) => {
                Ok(resize_premultiplied(img, width, height, FilterType::Lanczos3))
            }
            SourceAsset::Svg(data) => {
                render_svg(data, width, height).map_err(|reason| GenerateError::Svg {
                    path: self.path.clone(),
                    reason,
                })
            }
        }
    }
}

impl IconContentRenderer for SourceImageRenderer {
    fn render(&self, canvas: &mut Canvas, region: RectPx) -> Result<()> {
        if region.is_empty() {
            return Err(GenerateError::InvalidRegion {
                width: region.width,
                height: region.height,
            });
        }

        let resized = self.fit(region.width, region.height)?;
        canvas.paste(&resized, region.x, region.y);
        Ok(())
    }

    fn flattens_alpha(&self) -> bool {
        true
    }
}
