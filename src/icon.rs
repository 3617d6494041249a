//! Icon table and safe-zone geometry.
//!
//! The set of generated icons is fixed: [`ICONS`] lists every output file in
//! generation order. Geometry helpers compute the drawable region of an icon,
//! i.e. the part of the canvas that content renderers are allowed to paint.

/// Fraction of the edge reserved as padding on each side of a maskable icon.
pub const SAFE_ZONE_RATIO: f32 = 0.2;

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by `amount` pixels on every side.
    ///
    /// Saturates to an empty rectangle centered on the original.
    pub fn inset(&self, amount: u32) -> Self {
        let dx = amount.min(self.width / 2);
        let dy = amount.min(self.height / 2);
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - 2 * dx,
            height: self.height - 2 * dy,
        }
    }

    /// Returns the center point in fractional pixel coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns true if the pixel at (`px`, `py`) lies inside the rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// One output icon: its edge length, file name and safe-zone flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length of the square output in pixels.
    pub size: u32,
    /// File name written inside the output directory.
    pub name: &'static str,
    /// Maskable icons keep their content inside the platform safe zone.
    pub maskable: bool,
    /// Only produced by the procedural renderer.
    pub procedural_only: bool,
}

impl IconSpec {
    /// A regular, full-bleed icon.
    pub const fn new(size: u32, name: &'static str) -> Self {
        Self {
            size,
            name,
            maskable: false,
            procedural_only: false,
        }
    }

    /// Marks the icon as maskable.
    pub const fn maskable(self) -> Self {
        Self {
            maskable: true,
            ..self
        }
    }

    /// Restricts the icon to the procedural renderer.
    pub const fn procedural_only(self) -> Self {
        Self {
            procedural_only: true,
            ..self
        }
    }

    /// Padding kept free on each side: `floor(size * 0.2)` for maskable
    /// icons, zero otherwise.
    pub fn padding(&self) -> u32 {
        if self.maskable {
            safe_zone_padding(self.size)
        } else {
            0
        }
    }

    /// The centered square that content is drawn into.
    pub fn drawable_region(&self) -> RectPx {
        RectPx::from_size(self.size, self.size).inset(self.padding())
    }
}

/// Safe-zone padding for a maskable icon of the given edge length.
pub fn safe_zone_padding(size: u32) -> u32 {
    (size as f32 * SAFE_ZONE_RATIO).floor() as u32
}

/// Every icon the generator knows about, in generation order.
pub const ICONS: &[IconSpec] = &[
    IconSpec::new(64, "pwa-64x64.png"),
    IconSpec::new(192, "pwa-192x192.png"),
    IconSpec::new(512, "pwa-512x512.png"),
    IconSpec::new(512, "maskable-icon-512x512.png").maskable(),
    IconSpec::new(180, "apple-touch-icon.png").procedural_only(),
];
