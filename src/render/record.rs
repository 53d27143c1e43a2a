use crate::foundation::core::{BezPath, Canvas, Point, Rect, Size};
use crate::render::surface::{FrameRGBA, Paint, RenderSurface, Stroke, TextStyle};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// [`RenderSurface::clear`].
    Clear,
    /// [`RenderSurface::fill_rect`].
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill source.
        paint: Paint,
    },
    /// [`RenderSurface::stroke_rect`].
    StrokeRect {
        /// Outlined rectangle.
        rect: Rect,
        /// Outline style.
        stroke: Stroke,
    },
    /// [`RenderSurface::fill_path`].
    FillPath {
        /// Filled path.
        path: BezPath,
        /// Fill source.
        paint: Paint,
    },
    /// [`RenderSurface::stroke_path`].
    StrokePath {
        /// Stroked path.
        path: BezPath,
        /// Line style.
        stroke: Stroke,
    },
    /// [`RenderSurface::draw_text`].
    Text {
        /// Drawn string.
        text: String,
        /// Anchor point.
        anchor: Point,
        /// Text style.
        style: TextStyle,
    },
}

impl DrawCmd {
    /// Text of a [`DrawCmd::Text`] command.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCmd::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Surface that records draw calls instead of rasterizing.
///
/// Used to assert on draw structure without fonts or pixels. Text is measured as
/// `0.6 * size` per character. [`RenderSurface::read_pixels`] returns a transparent frame.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Empty recorder for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            cmds: Vec::new(),
        }
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Strings passed to `draw_text`, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.cmds.iter().filter_map(DrawCmd::text).collect()
    }

    /// Move out the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn clear(&mut self) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.cmds.push(DrawCmd::FillRect { rect, paint });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.cmds.push(DrawCmd::StrokeRect { rect, stroke });
    }

    fn fill_path(&mut self, path: &BezPath, paint: Paint) {
        self.cmds.push(DrawCmd::FillPath {
            path: path.clone(),
            paint,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: Stroke) {
        self.cmds.push(DrawCmd::StrokePath {
            path: path.clone(),
            stroke,
        });
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size {
        Size::new(text.chars().count() as f64 * style.size * 0.6, style.size)
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_owned(),
            anchor,
            style: *style,
        });
    }

    fn read_pixels(&mut self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: vec![0; self.canvas.rgba_len()],
            premultiplied: true,
        }
    }
}
