use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::foundation::math::Rng64;
use crate::plots::{PlotContext, polygon};
use crate::render::surface::{Paint, RenderSurface, Stroke};

const CELL: f64 = 30.0;
const CONTOUR_STEP: f64 = 40.0;
const CONTOUR_LEVELS: usize = 8;
const BLOBS_PER_LEVEL: usize = 5;
const BLOB_VERTICES: usize = 21;
const FIELD_STEP: f64 = 20.0;

/// Side of the square cell grid for `n` points: `min(8, floor(sqrt(n)))`.
pub(crate) fn cell_grid_side(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).min(8)
}

/// Red for high values, blue for low, purple around the middle.
pub(crate) fn heat_color(value: f64) -> Rgba8 {
    let channel = |v: f64| (255.0 * v.min(1.0)).floor().clamp(0.0, 255.0) as u8;
    Rgba8::rgba(channel(value * 2.0), 100, channel((1.0 - value) * 2.0), 204)
}

pub(crate) fn cell_grid(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let side = cell_grid_side(ctx.points.len());
    for i in 0..side {
        for j in 0..side {
            let value = ctx
                .points
                .get(i * side + j)
                .map_or(0.0, |p| ctx.scale.y().normalize(p.y));
            let origin = Point::new(
                ctx.area.left() + j as f64 * CELL + 10.0,
                ctx.area.top() + i as f64 * CELL + 10.0,
            );
            surface.fill_rect(
                Rect::from_origin_size(origin, (CELL - 2.0, CELL - 2.0)),
                Paint::Solid(heat_color(value)),
            );
        }
    }
}

/// Synthetic field sampled by the contour plots, in pixel offsets from the plot corner.
fn contour_field(dx: f64, dy: f64) -> f64 {
    (dx / 50.0).sin() * (dy / 50.0).cos() + (dx / 30.0).sin() * (dy / 70.0).cos()
}

/// Curve for one grid row at one level: each grid node whose field value is within 0.1 of
/// `threshold - 0.5` is joined to the previous hit with a quadratic bend. `None` when the row has
/// no hits.
fn contour_row(
    ctx: &PlotContext<'_>,
    row: usize,
    cols: usize,
    threshold: f64,
) -> Option<BezPath> {
    let mut path = BezPath::new();
    let mut started = false;
    let y = ctx.area.top() + row as f64 * CONTOUR_STEP;

    for col in 0..cols.saturating_sub(1) {
        let x = ctx.area.left() + col as f64 * CONTOUR_STEP;
        let value = contour_field(x - ctx.area.left(), y - ctx.area.top());
        if (value - (threshold - 0.5)).abs() >= 0.1 {
            continue;
        }
        let control = Point::new(x - CONTOUR_STEP / 2.0, y);
        if col == 0 {
            path.move_to((x, y));
        } else {
            if !started {
                path.move_to(control);
            }
            path.quad_to(control, Point::new(x, y));
        }
        started = true;
    }
    started.then_some(path)
}

pub(crate) fn contour(
    ctx: &PlotContext<'_>,
    surface: &mut dyn RenderSurface,
    filled: bool,
    rng: &mut Rng64,
) {
    let colors = ctx.config.colors();
    let cols = (ctx.area.chart_width() / CONTOUR_STEP).floor().max(0.0) as usize;
    let rows = (ctx.area.chart_height() / CONTOUR_STEP).floor().max(0.0) as usize;

    for level in 0..CONTOUR_LEVELS {
        let threshold = level as f64 / CONTOUR_LEVELS as f64;
        let stroke = Stroke::new(colors.cyclic(level), 1.5);
        for row in 0..rows.saturating_sub(1) {
            if let Some(path) = contour_row(ctx, row, cols, threshold) {
                surface.stroke_path(&path, stroke);
            }
        }
    }

    if !filled {
        return;
    }
    for level in 0..CONTOUR_LEVELS {
        let fill = Paint::Solid(colors.cyclic(level).with_opacity(0.3));
        let radius = 20.0 + level as f64 * 10.0;
        for _ in 0..BLOBS_PER_LEVEL {
            let center = Point::new(
                ctx.area.left() + rng.next_f64_01() * ctx.area.chart_width(),
                ctx.area.top() + rng.next_f64_01() * ctx.area.chart_height(),
            );
            let blob = polygon((0..BLOB_VERTICES).map(|k| {
                let jitter = rng.next_f64_01() * 10.0;
                center + Vec2::from_angle(k as f64 * 0.3) * (radius + jitter)
            }));
            surface.fill_path(&blob, fill);
        }
    }
}

/// Palette slot for field cell `(row, col)` of a `rows x cols` grid.
pub(crate) fn vector_field_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    len: usize,
) -> usize {
    let x = col as f64 / cols.max(1) as f64;
    let y = row as f64 / rows.max(1) as f64;
    let value = (x * 5.0).sin() * (y * 5.0).cos() * 0.5 + 0.5;
    ((value * len as f64).floor().max(0.0) as usize).min(len.saturating_sub(1))
}

pub(crate) fn vector_field(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let colors = ctx.config.colors();
    let rows = (ctx.area.chart_height() / FIELD_STEP).floor().max(0.0) as usize;
    let cols = (ctx.area.chart_width() / FIELD_STEP).floor().max(0.0) as usize;

    for i in 0..rows {
        for j in 0..cols {
            let color = colors.cyclic(vector_field_index(i, j, rows, cols, colors.len()));
            let origin = Point::new(
                ctx.area.left() + j as f64 * FIELD_STEP,
                ctx.area.top() + i as f64 * FIELD_STEP,
            );
            surface.fill_rect(
                Rect::from_origin_size(origin, (FIELD_STEP - 1.0, FIELD_STEP - 1.0)),
                Paint::Solid(color),
            );
        }
    }
}
