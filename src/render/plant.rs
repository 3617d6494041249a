//! Procedural plant content renderer.
//!
//! The glyph is designed on a 200px reference canvas and scaled linearly by
//! `size / 200`:
//!
//! ```text
//!            ____
//!           /    \        top leaf   50 x 35, accent color
//!           \____/
//!     ____          ____
//!    /    \__||__/    \   side leaves 50 x 35, centered 10 above center
//!    \____/  ||  \____/
//!            ||           stem        8 x 60, shifted 20 below center
//!            ||
//! ```
//!
//! Box edges are floored to whole pixels and primitives are filled without
//! anti-aliasing, so every icon is flat-colored and reproducible.

use resvg::tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use super::IconContentRenderer;
use super::raster::pixmap_to_rgba_image;
use crate::canvas::Canvas;
use crate::color::{BrandColor, BrandPalette};
use crate::error::{GenerateError, Result};
use crate::icon::{IconSpec, RectPx};

/// Edge length of the canvas the glyph dimensions are expressed in.
pub const DESIGN_SIZE: f32 = 200.0;

const STEM_WIDTH: f32 = 8.0;
const STEM_HEIGHT: f32 = 60.0;
const STEM_DROP: f32 = 20.0;
const LEAF_WIDTH: f32 = 50.0;
const LEAF_HEIGHT: f32 = 35.0;
const SIDE_LEAF_RISE: f32 = 10.0;
const TOP_LEAF_GAP: f32 = 20.0;

/// An axis-aligned box with whole-pixel edges; `right` and `bottom` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelBox {
    fn floored(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.floor() as i32,
            top: top.floor() as i32,
            right: right.floor() as i32,
            bottom: bottom.floor() as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// The box shifted into a coordinate space whose origin is `origin`.
    fn to_local(self, origin: RectPx) -> Option<Rect> {
        if self.width() <= 0 || self.height() <= 0 {
            return None;
        }
        let ox = origin.x as f32;
        let oy = origin.y as f32;
        Rect::from_ltrb(
            self.left as f32 - ox,
            self.top as f32 - oy,
            self.right as f32 - ox,
            self.bottom as f32 - oy,
        )
    }
}

/// Canvas-space geometry of the plant glyph for one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantLayout {
    pub stem: PixelBox,
    pub left_leaf: PixelBox,
    pub right_leaf: PixelBox,
    pub top_leaf: PixelBox,
}

impl PlantLayout {
    /// Lays the glyph out for a canvas of edge `size`, centered on `region`.
    pub fn new(size: u32, region: RectPx) -> Self {
        let scale = size as f32 / DESIGN_SIZE;
        let (cx, cy) = region.center();

        let stem_w = STEM_WIDTH * scale;
        let stem_h = STEM_HEIGHT * scale;
        let drop = STEM_DROP * scale;
        let leaf_w = LEAF_WIDTH * scale;
        let leaf_h = LEAF_HEIGHT * scale;
        let leaf_cy = cy - SIDE_LEAF_RISE * scale;
        let gap = TOP_LEAF_GAP * scale;

        Self {
            stem: PixelBox::floored(
                cx - stem_w / 2.0,
                cy - stem_h / 2.0 + drop,
                cx + stem_w / 2.0,
                cy + stem_h / 2.0 + drop,
            ),
            left_leaf: PixelBox::floored(
                cx - leaf_w,
                leaf_cy - leaf_h / 2.0,
                cx,
                leaf_cy + leaf_h / 2.0,
            ),
            right_leaf: PixelBox::floored(
                cx,
                leaf_cy - leaf_h / 2.0,
                cx + leaf_w,
                leaf_cy + leaf_h / 2.0,
            ),
            top_leaf: PixelBox::floored(
                cx - leaf_w / 2.0,
                cy - leaf_h - gap,
                cx + leaf_w / 2.0,
                cy - gap,
            ),
        }
    }
}

/// Draws the plant glyph over the brand background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantRenderer {
    palette: BrandPalette,
}

impl PlantRenderer {
    pub fn new(palette: BrandPalette) -> Self {
        Self { palette }
    }
}

impl Default for PlantRenderer {
    fn default() -> Self {
        Self::new(BrandPalette::default())
    }
}

fn flat_paint(color: BrandColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

fn fill_ellipse(pixmap: &mut Pixmap, bounds: PixelBox, region: RectPx, color: BrandColor) {
    let Some(path) = bounds.to_local(region).and_then(PathBuilder::from_oval) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &flat_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

impl IconContentRenderer for PlantRenderer {
    fn render(&self, canvas: &mut Canvas, region: RectPx) -> Result<()> {
        let invalid = || GenerateError::InvalidRegion {
            width: region.width,
            height: region.height,
        };
        // Pixmap::new rejects zero-sized buffers
        let mut pixmap = Pixmap::new(region.width, region.height).ok_or_else(invalid)?;

        let layout = PlantLayout::new(canvas.size(), region);
        tracing::debug!(?layout, "plant layout");

        // Degenerate boxes at tiny sizes are skipped rather than drawn
        if let Some(stem) = layout.stem.to_local(region) {
            pixmap.fill_rect(stem, &flat_paint(self.palette.stem), Transform::identity(), None);
        }
        fill_ellipse(&mut pixmap, layout.left_leaf, region, self.palette.leaf);
        fill_ellipse(&mut pixmap, layout.right_leaf, region, self.palette.leaf);
        fill_ellipse(&mut pixmap, layout.top_leaf, region, self.palette.accent);

        canvas.paste(&pixmap_to_rgba_image(&pixmap), region.x, region.y);
        Ok(())
    }

    fn supports(&self, _spec: &IconSpec) -> bool {
        true
    }
}
