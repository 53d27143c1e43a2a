use super::*;
use crate::foundation::core::Canvas;
use crate::model::config::PlotConfig;
use crate::model::point::ValidPoint;
use crate::render::record::{DrawCmd, RecordingSurface};

fn bounds_x(min: f64, max: f64) -> DataBounds {
    DataBounds {
        x_min: min,
        x_max: max,
        y_min: 0.0,
        y_max: 1.0,
    }
}

#[test]
fn eight_distinct_x_values_fill_eight_bins() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let bins = histogram_bins(xs.iter().copied(), &bounds_x(1.0, 8.0));
    assert_eq!(bins, vec![1; 8]);
}

#[test]
fn bin_count_caps_at_eight_and_max_lands_in_last_bin() {
    let xs = (0..20).map(f64::from).collect::<Vec<_>>();
    let bins = histogram_bins(xs.iter().copied(), &bounds_x(0.0, 19.0));
    assert_eq!(bins.len(), 8);
    assert_eq!(bins.iter().sum::<usize>(), 20);
    assert!(bins[7] >= 1);
}

#[test]
fn degenerate_x_range_puts_everything_in_first_bin() {
    let xs = [3.0, 3.0, 3.0];
    let bins = histogram_bins(xs.iter().copied(), &bounds_x(3.0, 3.0));
    assert_eq!(bins, vec![3, 0, 0]);
}

#[test]
fn nearest_rank_quartiles() {
    let ys = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    let q = Quartiles::of(&ys).unwrap();
    assert_eq!(q.q1, 3.0);
    assert_eq!(q.median, 6.0);
    assert_eq!(q.q3, 8.0);
    assert_eq!(q.lower_whisker, 1.0);
    assert_eq!(q.upper_whisker, 10.0);
}

#[test]
fn whiskers_stop_at_one_and_a_half_iqr() {
    let ys = [1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 100.0];
    let q = Quartiles::of(&ys).unwrap();
    assert_eq!((q.q1, q.q3), (2.0, 3.0));
    assert_eq!(q.upper_whisker, 4.5);
    assert_eq!(q.lower_whisker, 1.0);
    assert!(Quartiles::of(&[]).is_none());
}

#[test]
fn pie_slices_cover_the_circle() {
    let slices = pie_slices(&[1.0, 1.0, 2.0]);
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].0, 0.0);
    assert!((slices[2].0 - std::f64::consts::PI).abs() < 1e-12);
    let total: f64 = slices.iter().map(|s| s.1).sum();
    assert!((total - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
fn zero_total_pie_stays_finite() {
    let slices = pie_slices(&[0.0, 0.0]);
    assert!(slices.iter().all(|(a, b)| a.is_finite() && b.is_finite()));
}

#[test]
fn cancelling_values_clamp_to_one_turn() {
    let slices = pie_slices(&[1.0e7, -1.0e7 + 1.0]);
    assert_eq!(slices[0], (0.0, std::f64::consts::TAU));
    assert_eq!(slices[1], (std::f64::consts::TAU, -std::f64::consts::TAU));
}

#[test]
fn overflowing_total_gives_empty_slices() {
    let slices = pie_slices(&[1.0e308, 1.0e308]);
    assert_eq!(slices, vec![(0.0, 0.0), (0.0, 0.0)]);

    let config = PlotConfig::default();
    let pts = [
        ValidPoint { x: 1.0, y: 1.0e308 },
        ValidPoint { x: 2.0, y: 1.0e308 },
    ];
    let ctx = PlotContext::new(&config, &pts, Canvas::DEFAULT).unwrap();
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    pie(&ctx, &mut surface);
    assert!(surface.commands().is_empty());
}

#[test]
fn pie_labels_only_wide_slices() {
    let config = PlotConfig::default();
    let pts = [
        ValidPoint { x: 1.0, y: 10.0 },
        ValidPoint { x: 2.0, y: 0.1 },
    ];
    let ctx = PlotContext::new(&config, &pts, Canvas::DEFAULT).unwrap();
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    pie(&ctx, &mut surface);
    assert_eq!(surface.texts(), vec!["10"]);
}

#[test]
fn radar_with_two_points_draws_nothing() {
    let config = PlotConfig::default();
    let pts = [ValidPoint { x: 1.0, y: 1.0 }, ValidPoint { x: 2.0, y: 2.0 }];
    let ctx = PlotContext::new(&config, &pts, Canvas::DEFAULT).unwrap();
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    radar(&ctx, &mut surface);
    assert!(surface.commands().is_empty());
}

#[test]
fn radar_draws_one_dot_per_vertex() {
    let config = PlotConfig::default();
    let pts = [
        ValidPoint { x: 1.0, y: 1.0 },
        ValidPoint { x: 2.0, y: 2.0 },
        ValidPoint { x: 3.0, y: 4.0 },
        ValidPoint { x: 4.0, y: 3.0 },
    ];
    let ctx = PlotContext::new(&config, &pts, Canvas::DEFAULT).unwrap();
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    radar(&ctx, &mut surface);
    let white_fills = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::FillPath { paint: Paint::Solid(color), .. } if *color == Rgba8::WHITE))
        .count();
    assert_eq!(white_fills, 4);
}
