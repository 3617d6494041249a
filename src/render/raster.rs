//! Rasterization and compositing helpers shared by both renderers.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders SVG data to an RGBA image of exactly `width x height` pixels.
///
/// The document is stretched to the target box, matching how raster sources
/// are resized to fill the drawable region.
pub fn render_svg(svg_data: &[u8], width: u32, height: u32) -> Result<RgbaImage, String> {
    let opts = Options::default();
    let tree = Tree::from_data(svg_data, &opts).map_err(|e| e.to_string())?;

    let svg_size = tree.size();
    let sx = width as f32 / svg_size.width();
    let sy = height as f32 / svg_size.height();

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("cannot allocate {width}x{height} pixmap"))?;
    resvg::render(&tree, Transform::from_scale(sx, sy), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    // tiny_skia stores premultiplied alpha
    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Resampling
// ============================================================================

/// Resizes an RGBA image to exactly `width x height` with premultiplied alpha.
///
/// Straight-alpha resampling lets the color of fully transparent pixels bleed
/// into antialiased edges; filtering premultiplied values keeps edges the
/// color of the opaque content they fade out from.
pub fn resize_premultiplied(
    img: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> RgbaImage {
    let resized = imageops::resize(&premultiply_image(img), width, height, filter);
    unpremultiply_image(&resized)
}

/// Converts to normalized floats with color channels scaled by alpha.
fn premultiply_image(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

/// Inverse of [`premultiply_image`], back to 8-bit straight alpha.
fn unpremultiply_image(img: &Rgba32FImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        if a <= 0.0 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
        }
    })
}

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified position.
///
/// Uses standard alpha blending (source over destination), so the source's
/// transparency acts as the paste mask.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let dest_width = dest.width() as i32;
    let dest_height = dest.height() as i32;

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;

        if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
            continue;
        }

        let dst_pixel = dest.get_pixel(dx as u32, dy as u32);
        let blended = alpha_blend(*src_pixel, *dst_pixel);
        dest.put_pixel(dx as u32, dy as u32, blended);
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="#0000ff"/></svg>"##;

    #[test]
    fn svg_is_stretched_to_target_box() {
        let img = render_svg(SQUARE_SVG.as_bytes(), 32, 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(31, 31).0, [0, 0, 255, 255]);
    }

    #[test]
    fn malformed_svg_is_an_error() {
        assert!(render_svg(b"<not-svg", 16, 16).is_err());
    }

    #[test]
    fn premultiplied_resize_keeps_edge_color() {
        // White fading into transparent black must stay white at the edge
        let src = RgbaImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let resized = resize_premultiplied(&src, 40, 40, FilterType::Lanczos3);

        assert_eq!(resized.dimensions(), (40, 40));
        for p in resized.pixels().filter(|p| p[3] > 0) {
            assert_eq!([p[0], p[1], p[2]], [255, 255, 255], "fringe pixel {:?}", p.0);
        }
        assert_eq!(resized.get_pixel(0, 20).0, [255, 255, 255, 255]);
        assert_eq!(resized.get_pixel(39, 20)[3], 0);
    }

    #[test]
    fn composite_simple() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));

        composite_over(&mut dest, &src, 3, 3);

        assert_eq!(dest.get_pixel(5, 5).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn transparent_source_pixels_leave_background() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([136, 176, 75, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));

        composite_over(&mut dest, &src, 0, 0);

        assert!(dest.pixels().all(|p| p.0 == [136, 176, 75, 255]));
    }

    #[test]
    fn composite_with_transparency() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 128]));

        composite_over(&mut dest, &src, 0, 0);

        let pixel = dest.get_pixel(0, 0);
        assert!(pixel[0] > 0, "Should have some red");
        assert!(pixel[2] > 0, "Should have some blue");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn composite_clips_to_destination() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255]));

        composite_over(&mut dest, &src, -2, 2);

        assert_eq!(dest.get_pixel(0, 3).0, [0, 255, 0, 255]);
        assert_eq!(dest.get_pixel(2, 3).0, [255, 0, 0, 255]);
        assert_eq!(dest.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }
}
