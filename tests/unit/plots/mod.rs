use super::*;
use crate::model::plot_type::PlotCategory;
use crate::render::record::{DrawCmd, RecordingSurface};

fn sample_points() -> Vec<ValidPoint> {
    crate::model::point::EXAMPLE_PAIRS
        .iter()
        .map(|&(x, y)| ValidPoint { x, y })
        .collect()
}

#[test]
fn every_type_has_a_renderer_matching_its_category() {
    for &t in PlotType::ALL {
        let r = PlotRenderer::for_type(t);
        let family_ok = match t.category() {
            // heatmap is catalogued as Basic but shares the gridded cell renderer
            PlotCategory::Basic => matches!(
                r,
                PlotRenderer::Line { .. }
                    | PlotRenderer::Markers { .. }
                    | PlotRenderer::Bar
                    | PlotRenderer::Histogram
                    | PlotRenderer::BoxPlot
                    | PlotRenderer::Pie
                    | PlotRenderer::Radar
                    | PlotRenderer::CellGrid
            ),
            PlotCategory::GriddedData => matches!(
                r,
                PlotRenderer::CellGrid | PlotRenderer::Contour { .. } | PlotRenderer::VectorField
            ),
            PlotCategory::IrregularGrid => matches!(r, PlotRenderer::Triangulated(_)),
            PlotCategory::Volumetric => matches!(
                r,
                PlotRenderer::Trajectory3d { .. }
                    | PlotRenderer::Surface3d { .. }
                    | PlotRenderer::Voxels
                    | PlotRenderer::Placeholder3d
            ),
        };
        assert!(family_ok, "{t} mapped to {r:?}");
    }
    assert_eq!(PlotType::Heatmap.category(), PlotCategory::Basic);
    assert_eq!(
        PlotRenderer::for_type(PlotType::Heatmap),
        PlotRenderer::CellGrid
    );
}

#[test]
fn only_jittered_families_use_randomness() {
    let random = PlotType::ALL
        .iter()
        .filter(|t| PlotRenderer::for_type(**t).uses_randomness())
        .map(|t| t.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        random,
        vec!["contourf", "tricontour", "tricontourf", "tripcolor", "triplot"]
    );
}

#[test]
fn every_renderer_draws_something_for_example_data() {
    let config = PlotConfig::default();
    let points = sample_points();
    let ctx = PlotContext::new(&config, &points, Canvas::DEFAULT).unwrap();
    for &t in PlotType::ALL {
        let mut surface = RecordingSurface::new(Canvas::DEFAULT);
        let outcome = PlotRenderer::for_type(t).draw(&ctx, &mut surface, &mut Rng64::new(1));
        assert_eq!(outcome, DrawOutcome::Drawn, "{t}");
        assert!(!surface.commands().is_empty(), "{t} drew nothing");
    }
}

#[test]
fn single_point_never_produces_non_finite_geometry() {
    let config = PlotConfig::default();
    let points = [ValidPoint { x: 3.0, y: 3.0 }];
    let ctx = PlotContext::new(&config, &points, Canvas::DEFAULT).unwrap();
    for &t in PlotType::ALL {
        let mut surface = RecordingSurface::new(Canvas::DEFAULT);
        PlotRenderer::for_type(t).draw(&ctx, &mut surface, &mut Rng64::new(9));
        for cmd in surface.commands() {
            let finite = match cmd {
                DrawCmd::FillRect { rect, .. } | DrawCmd::StrokeRect { rect, .. } => {
                    [rect.x0, rect.y0, rect.x1, rect.y1].iter().all(|v| v.is_finite())
                }
                DrawCmd::FillPath { path, .. } | DrawCmd::StrokePath { path, .. } => {
                    path.elements().iter().all(|el| {
                        el.end_point()
                            .is_none_or(|p| p.x.is_finite() && p.y.is_finite())
                    })
                }
                DrawCmd::Text { anchor, .. } => anchor.x.is_finite() && anchor.y.is_finite(),
                DrawCmd::Clear => true,
            };
            assert!(finite, "{t}: {cmd:?}");
        }
    }
}

#[test]
fn bars_follow_point_order_and_outline_first_two() {
    let config = PlotConfig::default();
    let points = sample_points();
    let ctx = PlotContext::new(&config, &points, Canvas::DEFAULT).unwrap();
    let rects = basic::bar_rects(&ctx);
    assert_eq!(rects.len(), 8);
    assert_eq!(rects[0].x0, 50.0);
    assert!((rects[0].width() - 50.0).abs() < 1e-9);
    assert!((rects[1].x0 - 112.5).abs() < 1e-9);
    // y = 9 is the maximum: full chart height.
    assert!((rects[3].height() - 300.0).abs() < 1e-9);

    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    PlotRenderer::Bar.draw(&ctx, &mut surface, &mut Rng64::new(0));
    let outlines = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::StrokeRect { .. }))
        .count();
    assert_eq!(outlines, 2);
}

#[test]
fn polygon_closes_and_polyline_does_not() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
    assert_eq!(polyline(pts).elements().len(), 3);
    assert_eq!(polygon(pts).elements().len(), 4);
    assert!(polygon(std::iter::empty()).elements().is_empty());
}
