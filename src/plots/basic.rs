use crate::foundation::color::Rgba8;
use crate::foundation::core::Rect;
use crate::plots::{PlotContext, circle, polyline};
use crate::render::surface::{Paint, RenderSurface, Stroke};

const BAR_OUTLINE: Rgba8 = Rgba8::rgb(0x33, 0x41, 0x55);

pub(crate) fn line(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface, fill_area: bool) {
    let color = ctx.primary();
    let trace = polyline(ctx.mapped());

    if fill_area && let Some(last) = ctx.mapped().last() {
        let bottom = ctx.area.bottom();
        let mut fill = trace.clone();
        fill.line_to((last.x, bottom));
        fill.line_to((ctx.area.left(), bottom));
        fill.close_path();
        surface.fill_path(
            &fill,
            Paint::VerticalGradient {
                y0: ctx.area.top(),
                y1: bottom,
                top: color.with_alpha(0xCC),
                bottom: color.with_alpha(0x11),
            },
        );
    }

    surface.stroke_path(&trace, Stroke::new(color, ctx.config.line_width()));
}

pub(crate) fn markers(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface, bubble: bool) {
    let color = ctx.primary();
    for p in ctx.points {
        let center = ctx.scale.map(*p);
        if bubble {
            let radius = 5.0 + ctx.scale.y().normalize(p.y) * 20.0;
            let dot = circle(center, radius);
            surface.fill_path(&dot, Paint::Solid(color.with_alpha(0xCC)));
            surface.stroke_path(&dot, Stroke::new(color, 1.0));
        } else {
            surface.fill_path(&circle(center, 5.0), Paint::Solid(color));
        }
    }
}

/// Bar rectangles left to right in point order, each `0.8` of its slot wide.
pub(crate) fn bar_rects(ctx: &PlotContext<'_>) -> Vec<Rect> {
    let slot = ctx.area.chart_width() / ctx.points.len() as f64;
    let (bar_width, bar_gap) = (slot * 0.8, slot * 0.2);
    ctx.points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = ctx.area.left() + i as f64 * (bar_width + bar_gap);
            let height = ctx.scale.y().normalize(p.y) * ctx.area.chart_height();
            Rect::new(x, ctx.area.bottom() - height, x + bar_width, ctx.area.bottom())
        })
        .collect()
}

pub(crate) fn bars(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let color = ctx.primary();
    for (i, rect) in bar_rects(ctx).into_iter().enumerate() {
        surface.fill_rect(rect, Paint::Solid(color));
        if i < 2 {
            surface.stroke_rect(rect, Stroke::new(BAR_OUTLINE, 1.0));
        }
    }
}
