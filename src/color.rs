//! Brand colors.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GenerateError;

/// How much lighter than the leaf color the top leaf is drawn.
pub const ACCENT_LIFT: f32 = 0.15;

/// An opaque sRGB color, written as `#RRGGBB` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrandColor {
    /// Builds a color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(value: &str) -> Result<Self, GenerateError> {
        let invalid = || GenerateError::InvalidColor {
            value: value.to_string(),
        };
        let rgb: Srgb<u8> = value.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(rgb.red, rgb.green, rgb.blue))
    }

    /// Returns the color as a fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// Raises HSL lightness by `amount` (0.0-1.0), clamped at white.
    pub fn lighten(self, amount: f32) -> Self {
        let rgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut hsl: Hsl = rgb.into_color();
        hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
        let shifted: Srgb = hsl.into_color();
        Self::new(
            (shifted.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (shifted.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (shifted.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for BrandColor {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for BrandColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BrandColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for BrandColor {
    fn schema_name() -> String {
        "BrandColor".to_owned()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}

/// The colors used to paint every icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPalette {
    /// Canvas fill behind all content.
    pub background: BrandColor,
    /// Side leaves of the procedural plant.
    pub leaf: BrandColor,
    /// Top leaf of the procedural plant.
    pub accent: BrandColor,
    /// Stem of the procedural plant.
    pub stem: BrandColor,
}

impl BrandPalette {
    /// Organic green background.
    pub const BACKGROUND: BrandColor = BrandColor::new(0x88, 0xB0, 0x4B);
    pub const LEAF: BrandColor = BrandColor::new(0x2E, 0x7D, 0x32);
    pub const STEM: BrandColor = BrandColor::new(0x1B, 0x5E, 0x20);

    /// Builds a palette whose accent is derived from the leaf color.
    pub fn new(background: BrandColor, leaf: BrandColor, stem: BrandColor) -> Self {
        Self {
            background,
            leaf,
            accent: leaf.lighten(ACCENT_LIFT),
            stem,
        }
    }

    /// Overrides the derived accent color.
    pub fn with_accent(mut self, accent: BrandColor) -> Self {
        self.accent = accent;
        self
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::new(Self::BACKGROUND, Self::LEAF, Self::STEM)
    }
}
