use crate::foundation::error::{PlotError, PlotResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Raster surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Design default used by the preview: 600x400.
    pub const DEFAULT: Canvas = Canvas {
        width: 600,
        height: 400,
    };

    /// Create validated dimensions.
    ///
    /// Both sides must be non-zero and fit the rasterizer's 16-bit coordinate space.
    pub fn new(width: u32, height: u32) -> PlotResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlotError::validation("canvas width and height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PlotError::validation(format!(
                "canvas {width}x{height} exceeds {max}x{max}",
                max = u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64` for geometry math.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` for geometry math.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Center of the canvas in pixel space.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    /// Number of bytes in a tightly packed RGBA8 frame of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
