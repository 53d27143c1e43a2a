//! Plot renderers, one strategy per plot-type family.
//!
//! [`PlotRenderer::for_type`] is the only place plot types are mapped to drawing code; the match
//! is exhaustive so adding a [`PlotType`] fails to compile until it has a renderer.

use kurbo::Shape;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, Point};
use crate::foundation::math::Rng64;
use crate::model::config::PlotConfig;
use crate::model::plot_type::PlotType;
use crate::model::point::ValidPoint;
use crate::render::scale::{DataBounds, PlotArea, ScaleMapper};
use crate::render::surface::RenderSurface;

pub(crate) mod basic;
pub(crate) mod gridded;
pub(crate) mod irregular;
pub(crate) mod stats;
pub(crate) mod volumetric;

/// Everything a plot renderer reads for one frame.
#[derive(Clone, Copy, Debug)]
pub struct PlotContext<'a> {
    /// Active configuration snapshot.
    pub config: &'a PlotConfig,
    /// Valid points in caller order; never empty.
    pub points: &'a [ValidPoint],
    /// Min/max of `points`.
    pub bounds: DataBounds,
    /// Padded plotting rectangle.
    pub area: PlotArea,
    /// Data-to-pixel mapping over `area`.
    pub scale: ScaleMapper,
}

impl<'a> PlotContext<'a> {
    /// Context for `points` on `canvas`, or `None` when there are no points.
    pub fn new(config: &'a PlotConfig, points: &'a [ValidPoint], canvas: Canvas) -> Option<Self> {
        let bounds = DataBounds::of(points)?;
        let area = PlotArea::standard(canvas);
        Some(Self {
            config,
            points,
            bounds,
            area,
            scale: ScaleMapper::new(&bounds, &area),
        })
    }

    /// Canvas being drawn into.
    pub fn canvas(&self) -> Canvas {
        self.area.canvas()
    }

    /// Palette color at index 0.
    pub fn primary(&self) -> Rgba8 {
        self.config.colors().primary()
    }

    /// Pixel positions of all points, in order.
    pub fn mapped(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|p| self.scale.map(*p))
    }
}

/// Whether a renderer produced its plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Plot content was drawn.
    Drawn,
    /// The input cannot be drawn (its ranges overflow); the frame shows the fallback label instead.
    Unsupported,
}

/// How the irregular-grid family paints each kept triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleStyle {
    /// Outline in the value color (`tricontour`).
    ValueStroke,
    /// Translucent fill in the value color (`tricontourf`, `tripcolor`).
    ValueFill,
    /// Primary-color mesh outline (`triplot`).
    Mesh,
}

/// Drawing strategy for a plot type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotRenderer {
    /// Polyline in point order, optionally filled down to the x axis.
    Line {
        /// Close to the baseline and fill with a fading gradient.
        fill_area: bool,
    },
    /// One circle per point.
    Markers {
        /// Radius grows with normalized y.
        bubble: bool,
    },
    /// Bars left to right in point order.
    Bar,
    /// Counts over up to 8 equal-width x bins.
    Histogram,
    /// Nearest-rank box and whiskers over y.
    BoxPlot,
    /// Slices proportional to y.
    Pie,
    /// Polygon over evenly spaced spokes.
    Radar,
    /// Square cells colored red to blue by normalized y.
    CellGrid,
    /// Iso-level strokes over a synthetic field, optionally with jittered fill blobs.
    Contour {
        /// Add random translucent blobs per level.
        filled: bool,
    },
    /// Fixed cells colored from a synthetic field.
    VectorField,
    /// Random points joined into short-edged triangles.
    Triangulated(TriangleStyle),
    /// Projected synthetic spiral.
    Trajectory3d {
        /// Join the depth-sorted points with a line.
        connected: bool,
    },
    /// Damped radial sine surface.
    Surface3d {
        /// Stroke grid rows and columns instead of shading quads.
        wireframe: bool,
    },
    /// Depth-sorted pseudo-3D cubes.
    Voxels,
    /// Three axis strokes and a small point cloud.
    Placeholder3d,
}

impl PlotRenderer {
    /// Renderer for `plot_type`.
    pub fn for_type(plot_type: PlotType) -> Self {
        match plot_type {
            PlotType::Line => PlotRenderer::Line { fill_area: false },
            PlotType::Area => PlotRenderer::Line { fill_area: true },
            PlotType::Scatter => PlotRenderer::Markers { bubble: false },
            PlotType::Bubble => PlotRenderer::Markers { bubble: true },
            PlotType::Bar => PlotRenderer::Bar,
            PlotType::Histogram => PlotRenderer::Histogram,
            PlotType::Boxplot => PlotRenderer::BoxPlot,
            PlotType::Pie => PlotRenderer::Pie,
            PlotType::Radar => PlotRenderer::Radar,
            PlotType::Heatmap | PlotType::Imshow | PlotType::Pcolormesh => PlotRenderer::CellGrid,
            PlotType::Contour => PlotRenderer::Contour { filled: false },
            PlotType::Contourf => PlotRenderer::Contour { filled: true },
            PlotType::Barbs | PlotType::Quiver | PlotType::Streamplot => PlotRenderer::VectorField,
            PlotType::Tricontour => PlotRenderer::Triangulated(TriangleStyle::ValueStroke),
            PlotType::Tricontourf | PlotType::Tripcolor => {
                PlotRenderer::Triangulated(TriangleStyle::ValueFill)
            }
            PlotType::Triplot => PlotRenderer::Triangulated(TriangleStyle::Mesh),
            PlotType::Plot3d => PlotRenderer::Trajectory3d { connected: true },
            PlotType::Scatter3d => PlotRenderer::Trajectory3d { connected: false },
            PlotType::PlotSurface => PlotRenderer::Surface3d { wireframe: false },
            PlotType::PlotWireframe => PlotRenderer::Surface3d { wireframe: true },
            PlotType::Voxels => PlotRenderer::Voxels,
            PlotType::Bar3d
            | PlotType::FillBetween
            | PlotType::Quiver3d
            | PlotType::Stem3d
            | PlotType::PlotTrisurf => PlotRenderer::Placeholder3d,
        }
    }

    /// Whether output depends on the random source.
    pub fn uses_randomness(self) -> bool {
        matches!(
            self,
            PlotRenderer::Contour { filled: true } | PlotRenderer::Triangulated(_)
        )
    }

    /// Paint the plot content for `ctx`.
    pub fn draw(
        self,
        ctx: &PlotContext<'_>,
        surface: &mut dyn RenderSurface,
        rng: &mut Rng64,
    ) -> DrawOutcome {
        match self {
            PlotRenderer::Line { fill_area } => basic::line(ctx, surface, fill_area),
            PlotRenderer::Markers { bubble } => basic::markers(ctx, surface, bubble),
            PlotRenderer::Bar => basic::bars(ctx, surface),
            PlotRenderer::Histogram => stats::histogram(ctx, surface),
            PlotRenderer::BoxPlot => stats::boxplot(ctx, surface),
            PlotRenderer::Pie => stats::pie(ctx, surface),
            PlotRenderer::Radar => stats::radar(ctx, surface),
            PlotRenderer::CellGrid => gridded::cell_grid(ctx, surface),
            PlotRenderer::Contour { filled } => gridded::contour(ctx, surface, filled, rng),
            PlotRenderer::VectorField => gridded::vector_field(ctx, surface),
            PlotRenderer::Triangulated(style) => irregular::triangles(ctx, surface, style, rng),
            PlotRenderer::Trajectory3d { connected } => {
                volumetric::trajectory(ctx, surface, connected)
            }
            PlotRenderer::Surface3d { wireframe } => volumetric::surface(ctx, surface, wireframe),
            PlotRenderer::Voxels => volumetric::voxels(ctx, surface),
            PlotRenderer::Placeholder3d => volumetric::placeholder(ctx, surface),
        }
        DrawOutcome::Drawn
    }
}

/// Open path through `points` in order.
pub(crate) fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Closed path through `points` in order.
pub(crate) fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = polyline(points);
    if !path.elements().is_empty() {
        path.close_path();
    }
    path
}

pub(crate) fn circle(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius.abs()).to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/plots/mod.rs"]
mod tests;
