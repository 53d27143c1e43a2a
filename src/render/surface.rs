use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Point, Rect, Size};
use crate::model::config::FontFamily;

/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from a [`RenderSurface`] are premultiplied; the flag makes that explicit at
/// API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Fill source for closed shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Two-stop linear gradient running straight down from `y0` to `y1`, padded past the ends.
    VerticalGradient {
        /// Row where `top` applies.
        y0: f64,
        /// Row where `bottom` applies.
        y1: f64,
        /// Color at `y0`.
        top: Rgba8,
        /// Color at `y1`.
        bottom: Rgba8,
    },
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Paint::Solid(c)
    }
}

/// Stroke color and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Rgba8,
    /// Line width in px.
    pub width: f64,
}

impl Stroke {
    /// Stroke of `width` px in `color`.
    pub fn new(color: Rgba8, width: f64) -> Self {
        Self { color, width }
    }
}

/// Horizontal placement of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the left edge.
    #[default]
    Start,
    /// Anchor is the horizontal center.
    Center,
}

/// Vertical placement of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Anchor sits on the first line's baseline.
    #[default]
    Alphabetic,
    /// Anchor is the vertical middle of the text box.
    Middle,
}

/// Font and placement for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family.
    pub family: FontFamily,
    /// Size in px.
    pub size: f64,
    /// Bold face.
    pub bold: bool,
    /// Fill color.
    pub color: Rgba8,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Rotation about the anchor in radians (negative turns counter-clockwise on screen).
    pub rotation: f64,
}

impl TextStyle {
    /// Regular, start-aligned, unrotated style.
    pub fn new(family: FontFamily, size: f64, color: Rgba8) -> Self {
        Self {
            family,
            size,
            bold: false,
            color,
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
            rotation: 0.0,
        }
    }

    /// Bold copy.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Copy with horizontal alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Copy with vertical alignment.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Copy rotated by `radians` about the anchor.
    pub fn rotated(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }
}

/// Raster target the frame renderer draws into.
///
/// Coordinates are pixels with the origin top-left and y growing downward. Implementations own
/// their pixels; callers serialize access (one render at a time).
pub trait RenderSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Outline an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Fill a path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, paint: Paint);

    /// Stroke a path.
    fn stroke_path(&mut self, path: &BezPath, stroke: Stroke);

    /// Size of `text`'s layout box in `style`.
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size;

    /// Draw one line of text at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);

    /// Rasterize everything drawn since the last [`RenderSurface::clear`] and return the pixels.
    fn read_pixels(&mut self) -> FrameRGBA;
}
