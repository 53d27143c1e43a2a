use crate::foundation::core::Point;
use crate::foundation::math::Rng64;
use crate::plots::{PlotContext, TriangleStyle, polygon};
use crate::render::scale::PlotArea;
use crate::render::surface::{Paint, RenderSurface, Stroke};

const SAMPLE_COUNT: usize = 25;
const MAX_EDGE: f64 = 100.0;

/// A random sample with its synthetic field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Sample {
    pub at: Point,
    pub value: f64,
}

/// Scatter [`SAMPLE_COUNT`] samples uniformly over `area`, drawing x then y for each.
pub(crate) fn random_samples(area: &PlotArea, rng: &mut Rng64) -> Vec<Sample> {
    (0..SAMPLE_COUNT)
        .map(|_| {
            let x = area.left() + rng.next_f64_01() * area.chart_width();
            let y = area.top() + rng.next_f64_01() * area.chart_height();
            let value = ((x - area.left()) / 40.0).sin() * ((y - area.top()) / 40.0).cos();
            Sample {
                at: Point::new(x, y),
                value,
            }
        })
        .collect()
}

/// Every index triple `i < j < k` whose three edges are all shorter than 100px.
///
/// This is brute force over all triples, so triangles overlap freely.
pub(crate) fn short_edge_triangles(points: &[Point]) -> Vec<[usize; 3]> {
    let near = |a: usize, b: usize| points[a].distance(points[b]) < MAX_EDGE;
    let n = points.len();
    let mut out = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if !near(i, j) {
                continue;
            }
            for k in j + 1..n {
                if near(j, k) && near(k, i) {
                    out.push([i, j, k]);
                }
            }
        }
    }
    out
}

/// Palette slot for an average field value in `-1..=1`.
pub(crate) fn value_index(avg: f64, len: usize) -> usize {
    let raw = ((avg + 1.0) * len as f64 / 2.0).floor();
    (raw.max(0.0) as usize).min(len.saturating_sub(1))
}

pub(crate) fn triangles(
    ctx: &PlotContext<'_>,
    surface: &mut dyn RenderSurface,
    style: TriangleStyle,
    rng: &mut Rng64,
) {
    let colors = ctx.config.colors();
    let samples = random_samples(&ctx.area, rng);
    let points = samples.iter().map(|s| s.at).collect::<Vec<_>>();

    for [i, j, k] in short_edge_triangles(&points) {
        let tri = polygon([points[i], points[j], points[k]]);
        let avg = (samples[i].value + samples[j].value + samples[k].value) / 3.0;
        let color = colors.cyclic(value_index(avg, colors.len()));
        match style {
            TriangleStyle::ValueFill => {
                surface.fill_path(&tri, Paint::Solid(color.with_alpha(0x80)));
            }
            TriangleStyle::ValueStroke => surface.stroke_path(&tri, Stroke::new(color, 1.0)),
            TriangleStyle::Mesh => surface.stroke_path(&tri, Stroke::new(ctx.primary(), 1.0)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plots/irregular.rs"]
mod tests;
