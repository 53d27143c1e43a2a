use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::math::Rng64;
use crate::model::config::{FontFamily, PlotConfig};
use crate::model::point::{DataPoint, ValidPoint};
use crate::plots::{DrawOutcome, PlotContext, PlotRenderer};
use crate::render::scale::{AXIS_PADDING, FRAME_MARGIN};
use crate::render::surface::{Paint, RenderSurface, Stroke, TextAlign, TextStyle};

const FRAME_TOP: Rgba8 = Rgba8::rgb(0xf8, 0xfa, 0xfc);
const FRAME_BOTTOM: Rgba8 = Rgba8::rgb(0xf1, 0xf5, 0xf9);
const RULE: Rgba8 = Rgba8::rgb(0xe2, 0xe8, 0xf0);
const AXIS: Rgba8 = Rgba8::rgb(0x64, 0x74, 0x8b);
const INK: Rgba8 = Rgba8::rgb(0x33, 0x41, 0x55);
const PLACEHOLDER_INK: Rgba8 = Rgba8::rgb(0x66, 0x66, 0x66);
const FALLBACK_INK: Rgba8 = Rgba8::rgb(0xdd, 0xdd, 0xdd);
const GRID_STEP: f64 = 25.0;

/// Text shown instead of a plot when there are no valid points.
pub const EMPTY_PLACEHOLDER: &str = "Add data points to preview graph";

/// What a render produced, for callers that want to react to degradations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No valid points; only the placeholder message was drawn.
    Placeholder,
    /// The plot type could not draw this data; its fallback label was drawn instead.
    Fallback,
    /// The plot was drawn.
    Plotted,
}

/// Draws one complete frame: background, frame, axes, plot, labels, grid and legend.
///
/// Rendering is total: every well-typed input produces a frame. Empty data degrades to a
/// placeholder message and plots that cannot draw their input degrade to a label naming the type.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameRenderer;

impl FrameRenderer {
    /// Full redraw of `surface` from `config` and `data`.
    ///
    /// `rng` feeds the plot types with random decoration; a fixed seed makes every type
    /// pixel-reproducible.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(plot_type = %config.plot_type(), points = data.len())
    )]
    pub fn render(
        surface: &mut dyn RenderSurface,
        config: &PlotConfig,
        data: &[DataPoint],
        rng: &mut Rng64,
    ) -> FrameOutcome {
        let canvas = Canvas {
            width: surface.width(),
            height: surface.height(),
        };
        let (w, h) = (canvas.w(), canvas.h());

        surface.clear();
        surface.fill_rect(
            Rect::new(0.0, 0.0, w, h),
            Paint::Solid(config.background_color()),
        );
        let frame = Rect::new(FRAME_MARGIN, FRAME_MARGIN, w - FRAME_MARGIN, h - FRAME_MARGIN);
        surface.fill_rect(
            frame,
            Paint::VerticalGradient {
                y0: 0.0,
                y1: h,
                top: FRAME_TOP,
                bottom: FRAME_BOTTOM,
            },
        );
        surface.stroke_rect(frame, Stroke::new(RULE, 1.0));

        let valid = data.iter().filter_map(DataPoint::valid).collect::<Vec<ValidPoint>>();
        let Some(ctx) = PlotContext::new(config, &valid, canvas) else {
            tracing::debug!("no valid points, drawing placeholder");
            let style = TextStyle::new(FontFamily::Arial, 16.0, PLACEHOLDER_INK)
                .align(TextAlign::Center);
            surface.draw_text(EMPTY_PLACEHOLDER, canvas.center(), &style);
            return FrameOutcome::Placeholder;
        };

        draw_axes(surface, canvas);

        let outcome = if ctx.bounds.is_finite() {
            PlotRenderer::for_type(config.plot_type()).draw(&ctx, surface, rng)
        } else {
            tracing::debug!(bounds = ?ctx.bounds, "data range overflows");
            DrawOutcome::Unsupported
        };
        if outcome == DrawOutcome::Unsupported {
            tracing::debug!("drawing fallback label");
            let style = TextStyle::new(config.font_family(), config.font_size(), FALLBACK_INK)
                .align(TextAlign::Center);
            surface.draw_text(&fallback_label(config), canvas.center(), &style);
        }

        draw_labels(surface, config, canvas);
        if config.show_grid() {
            draw_grid(surface, canvas);
        }
        if config.show_legend() {
            draw_legend(surface, config, canvas);
        }

        match outcome {
            DrawOutcome::Drawn => FrameOutcome::Plotted,
            DrawOutcome::Unsupported => FrameOutcome::Fallback,
        }
    }
}

/// Label drawn when a plot type cannot render its input.
pub fn fallback_label(config: &PlotConfig) -> String {
    format!("{} visualization (preview)", config.plot_type())
}

fn draw_axes(surface: &mut dyn RenderSurface, canvas: Canvas) {
    let (w, h) = (canvas.w(), canvas.h());
    let corner = Point::new(AXIS_PADDING, h - AXIS_PADDING);
    let mut axes = BezPath::new();
    axes.move_to(corner);
    axes.line_to((w - AXIS_PADDING, h - AXIS_PADDING));
    axes.move_to(corner);
    axes.line_to((AXIS_PADDING, AXIS_PADDING));
    surface.stroke_path(&axes, Stroke::new(AXIS, 1.5));
}

fn draw_labels(surface: &mut dyn RenderSurface, config: &PlotConfig, canvas: Canvas) {
    let (w, h) = (canvas.w(), canvas.h());
    let label = TextStyle::new(config.font_family(), config.label_size(), INK)
        .align(TextAlign::Center);

    surface.draw_text(config.x_label(), Point::new(w / 2.0, h - 15.0), &label);
    surface.draw_text(
        config.y_label(),
        Point::new(15.0, h / 2.0),
        &label.rotated(-std::f64::consts::FRAC_PI_2),
    );

    let title = TextStyle::new(config.font_family(), config.title_size(), INK)
        .bold()
        .align(TextAlign::Center);
    surface.draw_text(config.title(), Point::new(w / 2.0, 30.0), &title);
}

fn draw_grid(surface: &mut dyn RenderSurface, canvas: Canvas) {
    let (w, h) = (canvas.w(), canvas.h());
    let stroke = Stroke::new(RULE, 0.5);
    let (lo, right, bottom) = (AXIS_PADDING, w - AXIS_PADDING, h - AXIS_PADDING);

    let mut x = lo;
    while x < right {
        let mut line = BezPath::new();
        line.move_to((x, lo));
        line.line_to((x, bottom));
        surface.stroke_path(&line, stroke);
        x += GRID_STEP;
    }
    let mut y = lo;
    while y < bottom {
        let mut line = BezPath::new();
        line.move_to((lo, y));
        line.line_to((right, y));
        surface.stroke_path(&line, stroke);
        y += GRID_STEP;
    }
}

fn draw_legend(surface: &mut dyn RenderSurface, config: &PlotConfig, canvas: Canvas) {
    let w = canvas.w();
    let frame = Rect::from_origin_size((w - 120.0, 60.0), (100.0, 30.0));
    surface.fill_rect(frame, Paint::Solid(Rgba8::WHITE));
    surface.stroke_rect(frame, Stroke::new(RULE, 1.0));
    surface.fill_rect(
        Rect::from_origin_size((w - 110.0, 70.0), (15.0, 10.0)),
        Paint::Solid(config.colors().primary()),
    );
    let style = TextStyle::new(config.font_family(), config.font_size(), INK);
    surface.draw_text("Dataset", Point::new(w - 90.0, 80.0), &style);
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
