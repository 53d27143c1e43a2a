use std::sync::Arc;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Size};
use crate::foundation::error::{PlotError, PlotResult};
use crate::render::surface::{
    FrameRGBA, Paint, RenderSurface, Stroke, TextAlign, TextBaseline, TextStyle,
};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};

/// Software raster surface backed by `vello_cpu`, with Parley-shaped text.
///
/// Draw calls queue into a `vello_cpu::RenderContext`; [`RenderSurface::read_pixels`] flushes and
/// rasterizes them into a fresh premultiplied pixmap. Geometry with non-finite coordinates is
/// dropped rather than handed to the rasterizer.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    text: TextLayoutEngine,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Transparent surface sized to `canvas`.
    pub fn new(canvas: Canvas) -> PlotResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PlotError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PlotError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(PlotError::render("surface dimensions must be non-zero"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            text: TextLayoutEngine::new(),
        })
    }

    fn set_paint(&mut self, paint: Paint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(c)),
            Paint::VerticalGradient {
                y0,
                y1,
                top,
                bottom,
            } => {
                let span = y1 - y0;
                if !(span.is_finite() && y0.is_finite()) || span <= 0.0 {
                    self.ctx.set_paint(color_to_cpu(top));
                    return;
                }
                let rows = span.ceil().clamp(1.0, f64::from(u16::MAX)) as u16;
                self.ctx.set_paint(vertical_gradient_image(rows, top, bottom));
                self.ctx.set_paint_transform(
                    vello_cpu::kurbo::Affine::translate((0.0, y0))
                        * vello_cpu::kurbo::Affine::scale_non_uniform(
                            1.0,
                            span / f64::from(rows),
                        ),
                );
            }
        }
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(stroke.color));
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
    }

    fn estimate_text(text: &str, style: &TextStyle) -> Size {
        Size::new(text.chars().count() as f64 * style.size * 0.6, style.size)
    }
}

impl RenderSurface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn clear(&mut self) {
        self.ctx.reset();
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        if !rect_is_finite(rect) {
            tracing::debug!(?rect, "dropping non-finite rect fill");
            return;
        }
        self.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        if !rect_is_finite(rect) || !stroke_is_drawable(stroke) {
            tracing::debug!(?rect, "dropping non-finite rect stroke");
            return;
        }
        self.set_stroke(stroke);
        self.ctx.stroke_rect(&rect_to_cpu(rect));
    }

    fn fill_path(&mut self, path: &BezPath, paint: Paint) {
        if !path_is_finite(path) {
            tracing::debug!("dropping non-finite path fill");
            return;
        }
        self.set_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: Stroke) {
        if !path_is_finite(path) || !stroke_is_drawable(stroke) {
            tracing::debug!("dropping non-finite path stroke");
            return;
        }
        self.set_stroke(stroke);
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size {
        match self.text.shape(
            text,
            style.family,
            style.bold,
            style.size as f32,
            TextBrushRgba8::from(style.color),
        ) {
            Some(shaped) => Size::new(shaped.width(), shaped.height()),
            None => Self::estimate_text(text, style),
        }
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        if !(anchor.x.is_finite() && anchor.y.is_finite() && style.rotation.is_finite()) {
            tracing::debug!(text, "dropping text at non-finite anchor");
            return;
        }
        let Some(shaped) = self.text.shape(
            text,
            style.family,
            style.bold,
            style.size as f32,
            TextBrushRgba8::from(style.color),
        ) else {
            tracing::debug!(text, family = style.family.name(), "text skipped, no font");
            return;
        };

        let dx = match style.align {
            TextAlign::Start => 0.0,
            TextAlign::Center => -shaped.width() / 2.0,
        };
        let dy = match style.baseline {
            TextBaseline::Alphabetic => -shaped.baseline(),
            TextBaseline::Middle => -shaped.height() / 2.0,
        };
        let transform = Affine::translate(anchor.to_vec2())
            * Affine::rotate(style.rotation)
            * Affine::translate((dx, dy));

        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for line in shaped.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&shaped.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn read_pixels(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn vertical_gradient_image(rows: u16, top: Rgba8, bottom: Rgba8) -> vello_cpu::Image {
    let last = f64::from(rows.saturating_sub(1).max(1));
    let mut may_have_opacities = false;
    let pixels = (0..rows)
        .map(|row| {
            let [r, g, b, a] = top.lerp(bottom, f64::from(row) / last).to_premul();
            may_have_opacities |= a != 255;
            vello_cpu::peniko::color::PremulRgba8 { r, g, b, a }
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, 1, rows, may_have_opacities);
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

fn stroke_is_drawable(stroke: Stroke) -> bool {
    stroke.width.is_finite() && stroke.width > 0.0
}

fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}

fn path_is_finite(path: &BezPath) -> bool {
    use kurbo::PathEl;

    let ok = |p: Point| p.x.is_finite() && p.y.is_finite();
    path.elements().iter().all(|el| match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => ok(p),
        PathEl::QuadTo(p1, p2) => ok(p1) && ok(p2),
        PathEl::CurveTo(p1, p2, p3) => ok(p1) && ok(p2) && ok(p3),
        PathEl::ClosePath => true,
    })
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
