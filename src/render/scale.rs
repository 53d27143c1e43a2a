use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::math::nonzero_span;
use crate::model::point::ValidPoint;

/// Inset of the decorative content frame from the canvas edge.
pub const FRAME_MARGIN: f64 = 40.0;
/// Inset of the axes and plotting rectangle from the canvas edge.
pub const AXIS_PADDING: f64 = 50.0;

/// Linear data-to-pixel mapping along one axis.
///
/// `map(min) == start` and `map(max) == start + extent`. A zero data range is treated as 1, so
/// all-equal data collapses onto `start`. A negative `extent` flips direction, which is how the y
/// axis puts larger values higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    min: f64,
    span: f64,
    start: f64,
    extent: f64,
}

impl LinearScale {
    /// Scale mapping `[min, max]` onto `[start, start + extent]`.
    pub fn new(min: f64, max: f64, start: f64, extent: f64) -> Self {
        Self {
            min,
            span: nonzero_span(max - min),
            start,
            extent,
        }
    }

    /// Position of `value` within the data range, 0 at `min` and 1 at `max`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span
    }

    /// Pixel coordinate of `value`.
    pub fn map(&self, value: f64) -> f64 {
        self.start + self.normalize(value) * self.extent
    }

    /// Pixel coordinate of the data minimum.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Signed pixel length of the data range.
    pub fn extent(&self) -> f64 {
        self.extent
    }
}

/// Min/max of the valid points along both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    /// Smallest x.
    pub x_min: f64,
    /// Largest x.
    pub x_max: f64,
    /// Smallest y.
    pub y_min: f64,
    /// Largest y.
    pub y_max: f64,
}

impl DataBounds {
    /// Bounds of `points`, or `None` when there are none.
    pub fn of(points: &[ValidPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut b = DataBounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in &points[1..] {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        Some(b)
    }

    /// `x_max - x_min`.
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// `y_max - y_min`.
    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// `false` when a range overflows, which would push points off to infinity.
    pub fn is_finite(&self) -> bool {
        self.x_range().is_finite() && self.y_range().is_finite()
    }
}

/// The padded plotting rectangle inside a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    canvas: Canvas,
    padding: f64,
}

impl PlotArea {
    /// Plotting rectangle inset by `padding` on every side.
    pub fn new(canvas: Canvas, padding: f64) -> Self {
        Self { canvas, padding }
    }

    /// Plotting rectangle with the standard axis padding.
    pub fn standard(canvas: Canvas) -> Self {
        Self::new(canvas, AXIS_PADDING)
    }

    /// Canvas this area lives in.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Inset from each edge.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Left edge (x of the y axis).
    pub fn left(&self) -> f64 {
        self.padding
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.canvas.w() - self.padding
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.padding
    }

    /// Bottom edge (y of the x axis).
    pub fn bottom(&self) -> f64 {
        self.canvas.h() - self.padding
    }

    /// Width of the plotting rectangle.
    pub fn chart_width(&self) -> f64 {
        self.canvas.w() - self.padding * 2.0
    }

    /// Height of the plotting rectangle.
    pub fn chart_height(&self) -> f64 {
        self.canvas.h() - self.padding * 2.0
    }

    /// The plotting rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }
}

/// Maps data points into the plotting rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapper {
    x: LinearScale,
    y: LinearScale,
}

impl ScaleMapper {
    /// Mapper from `bounds` onto `area`, with y inverted.
    pub fn new(bounds: &DataBounds, area: &PlotArea) -> Self {
        Self {
            x: LinearScale::new(bounds.x_min, bounds.x_max, area.left(), area.chart_width()),
            y: LinearScale::new(
                bounds.y_min,
                bounds.y_max,
                area.bottom(),
                -area.chart_height(),
            ),
        }
    }

    /// Horizontal scale.
    pub fn x(&self) -> &LinearScale {
        &self.x
    }

    /// Vertical scale.
    pub fn y(&self) -> &LinearScale {
        &self.y
    }

    /// Pixel position of a data point.
    pub fn map(&self, p: ValidPoint) -> Point {
        Point::new(self.x.map(p.x), self.y.map(p.y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scale.rs"]
mod tests;
