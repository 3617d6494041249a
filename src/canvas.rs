//! The per-icon pixel buffer.
//!
//! A [`Canvas`] lives for exactly one icon: it is allocated filled with the
//! background color, handed to a content renderer, then encoded to PNG and
//! dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};

use crate::color::BrandColor;
use crate::error::{GenerateError, Result};
use crate::icon::RectPx;
use crate::render::raster::composite_over;

/// A square RGBA canvas pre-filled with the brand background.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocates a `size x size` canvas filled with `background`.
    pub fn new(size: u32, background: BrandColor) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size, size, background.to_rgba()),
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// The whole canvas as a rectangle.
    pub fn bounds(&self) -> RectPx {
        RectPx::from_size(self.pixels.width(), self.pixels.height())
    }

    /// The composed pixels, always fully opaque.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pastes `layer` with its top-left corner at (`x`, `y`), using the
    /// layer's alpha channel as the mask.
    pub fn paste(&mut self, layer: &RgbaImage, x: u32, y: u32) {
        composite_over(&mut self.pixels, layer, x as i32, y as i32);
    }

    /// Writes the canvas as PNG into `w`.
    ///
    /// With `flatten`, alpha is dropped and the image is stored as RGB; the
    /// canvas is opaque, so this only discards the redundant channel.
    pub fn encode_png<W: Write>(&self, w: W, flatten: bool, name: &str) -> Result<()> {
        let encoder =
            PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
        let (width, height) = self.pixels.dimensions();

        let result = if flatten {
            let rgb = DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8();
            encoder.write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        } else {
            encoder.write_image(self.pixels.as_raw(), width, height, ExtendedColorType::Rgba8)
        };

        result.map_err(|source| GenerateError::Encode {
            name: name.to_string(),
            source,
        })
    }

    /// Encodes the canvas to `path`, replacing any existing file.
    pub fn save_png(&self, path: &Path, flatten: bool) -> Result<()> {
        let io_err = |source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.encode_png(&mut writer, flatten, &name)?;
        writer.flush().map_err(io_err)
    }
}
