use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::foundation::math::nonzero_span;
use crate::plots::{PlotContext, circle, polygon};
use crate::render::scale::DataBounds;
use crate::render::surface::{
    Paint, RenderSurface, Stroke, TextAlign, TextBaseline, TextStyle,
};

const RADAR_BACKDROP: Rgba8 = Rgba8::rgb(0xf8, 0xfa, 0xfc);
const RADAR_RULE: Rgba8 = Rgba8::rgb(0xe2, 0xe8, 0xf0);

/// Point counts per x bin: `min(8, n)` equal-width bins over the x range, the maximum landing in
/// the last bin.
pub(crate) fn histogram_bins(
    xs: impl ExactSizeIterator<Item = f64>,
    bounds: &DataBounds,
) -> Vec<usize> {
    let bin_count = xs.len().min(8);
    let mut bins = vec![0usize; bin_count];
    if bin_count == 0 {
        return bins;
    }
    let span = nonzero_span(bounds.x_range());
    for x in xs {
        let raw = ((x - bounds.x_min) / span * bin_count as f64).floor();
        let index = (raw.max(0.0) as usize).min(bin_count - 1);
        bins[index] += 1;
    }
    bins
}

pub(crate) fn histogram(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let bins = histogram_bins(ctx.points.iter().map(|p| p.x), &ctx.bounds);
    let max_count = bins.iter().copied().max().unwrap_or(0).max(1) as f64;
    let bin_width = ctx.area.chart_width() / bins.len().max(1) as f64;
    let color = ctx.primary();

    for (i, &count) in bins.iter().enumerate() {
        let x = ctx.area.left() + i as f64 * bin_width;
        let height = count as f64 / max_count * ctx.area.chart_height();
        surface.fill_rect(
            Rect::new(
                x,
                ctx.area.bottom() - height,
                x + bin_width * 0.8,
                ctx.area.bottom(),
            ),
            Paint::Solid(color),
        );
    }
}

/// Nearest-rank five-number summary used by the box plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
}

impl Quartiles {
    /// Summary of `ys`. Quantile `p` is `sorted[floor(p * n)]`; whiskers reach 1.5 IQR past the
    /// box but never beyond the data.
    pub fn of(ys: &[f64]) -> Option<Self> {
        let mut sorted = ys.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (&lo, &hi) = (sorted.first()?, sorted.last()?);
        let at = |p: f64| sorted[((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1)];

        let (q1, median, q3) = (at(0.25), at(0.5), at(0.75));
        let iqr = q3 - q1;
        Some(Self {
            q1,
            median,
            q3,
            lower_whisker: lo.max(q1 - 1.5 * iqr),
            upper_whisker: hi.min(q3 + 1.5 * iqr),
        })
    }
}

pub(crate) fn boxplot(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let ys = ctx.points.iter().map(|p| p.y).collect::<Vec<_>>();
    let Some(q) = Quartiles::of(&ys) else {
        return;
    };
    let color = ctx.primary();
    let stroke = Stroke::new(color, 1.5);
    let y = |v: f64| ctx.scale.y().map(v);

    let left = ctx.area.left() + ctx.area.chart_width() * 0.25;
    let width = ctx.area.chart_width() * 0.5;
    let mid = left + width / 2.0;
    let cap = width * 0.3;

    let body = Rect::new(left, y(q.q3), left + width, y(q.q1));
    surface.fill_rect(body, Paint::Solid(color.with_alpha(0x80)));
    surface.stroke_rect(body, stroke);

    let mut median = BezPath::new();
    median.move_to((left, y(q.median)));
    median.line_to((left + width, y(q.median)));
    surface.stroke_path(&median, stroke);

    let mut whiskers = BezPath::new();
    whiskers.move_to((mid, y(q.q3)));
    whiskers.line_to((mid, y(q.upper_whisker)));
    whiskers.move_to((mid, y(q.q1)));
    whiskers.line_to((mid, y(q.lower_whisker)));
    surface.stroke_path(&whiskers, stroke);

    let mut caps = BezPath::new();
    for v in [q.upper_whisker, q.lower_whisker] {
        caps.move_to((mid - cap / 2.0, y(v)));
        caps.line_to((mid + cap / 2.0, y(v)));
    }
    surface.stroke_path(&caps, stroke);
}

/// `(start, sweep)` angles in radians for each value, starting at 0 and running clockwise on
/// screen. A zero total is treated as 1.
///
/// Each sweep is clamped to one full turn either way; a sweep that is not finite becomes 0.
pub(crate) fn pie_slices(values: &[f64]) -> Vec<(f64, f64)> {
    let total = nonzero_span(values.iter().sum());
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = v / total * TAU;
            let sweep = if sweep.is_finite() {
                sweep.clamp(-TAU, TAU)
            } else {
                0.0
            };
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

pub(crate) fn pie(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let center = ctx.canvas().center();
    let radius = ctx.area.chart_width().min(ctx.area.chart_height()) / 2.0 - 20.0;
    let values = ctx.points.iter().map(|p| p.y).collect::<Vec<_>>();
    let label_style = TextStyle::new(
        ctx.config.font_family(),
        ctx.config.font_size(),
        Rgba8::WHITE,
    )
    .align(TextAlign::Center)
    .baseline(TextBaseline::Middle);

    for (i, (&value, (start, sweep))) in values.iter().zip(pie_slices(&values)).enumerate() {
        if sweep == 0.0 {
            continue;
        }
        let wedge = wedge(center, radius, start, sweep);
        surface.fill_path(&wedge, Paint::Solid(ctx.config.colors().cyclic(i)));
        surface.stroke_path(&wedge, Stroke::new(Rgba8::WHITE, 2.0));

        if sweep > 0.3 {
            let mid = start + sweep / 2.0;
            let anchor = center + Vec2::from_angle(mid) * (radius * 0.7);
            surface.draw_text(&value.to_string(), anchor, &label_style);
        }
    }
}

fn wedge(center: Point, radius: f64, start: f64, sweep: f64) -> BezPath {
    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(center + Vec2::from_angle(start) * radius);
    path.extend(arc.append_iter(0.1));
    path.close_path();
    path
}

/// Unit direction of spoke `i` of `n`, the first pointing straight up.
fn spoke(i: usize, n: usize) -> Vec2 {
    Vec2::from_angle(i as f64 / n as f64 * TAU - FRAC_PI_2)
}

pub(crate) fn radar(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let sides = ctx.points.len();
    if sides < 3 {
        tracing::debug!(sides, "radar needs at least three points");
        return;
    }
    let center = ctx.canvas().center();
    let radius = ctx.area.chart_width().min(ctx.area.chart_height()) / 2.0 - 20.0;
    let color = ctx.primary();

    let backdrop = polygon((0..sides).map(|i| center + spoke(i, sides) * radius));
    surface.fill_path(&backdrop, Paint::Solid(RADAR_BACKDROP));
    surface.stroke_path(&backdrop, Stroke::new(RADAR_RULE, 1.0));
    for i in 0..sides {
        let mut rule = BezPath::new();
        rule.move_to(center);
        rule.line_to(center + spoke(i, sides) * radius);
        surface.stroke_path(&rule, Stroke::new(RADAR_RULE, 1.0));
    }

    let y_max = nonzero_span(ctx.bounds.y_max);
    let vertices = ctx
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| center + spoke(i, sides) * (radius * p.y / y_max))
        .collect::<Vec<_>>();

    let data = polygon(vertices.iter().copied());
    surface.fill_path(&data, Paint::Solid(color.with_alpha(0x80)));
    surface.stroke_path(&data, Stroke::new(color, 2.0));
    for v in vertices {
        let dot = circle(v, 5.0);
        surface.fill_path(&dot, Paint::Solid(Rgba8::WHITE));
        surface.stroke_path(&dot, Stroke::new(color, 2.0));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plots/stats.rs"]
mod tests;
