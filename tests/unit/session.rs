use super::*;
use crate::foundation::core::Canvas;
use crate::model::config::FontFamily;
use crate::render::record::RecordingSurface;

#[test]
fn starts_with_three_blank_rows_and_defaults() {
    let s = PlotSession::new();
    assert_eq!(s.data().len(), 3);
    assert!(s.data().valid_points().is_empty());
    assert_eq!(s.config(), &PlotConfig::default());
    assert!(s.check_ready().is_err());
}

#[test]
fn preset_keeps_title_and_plot_type() {
    let mut s = PlotSession::new();
    s.update_config(&PlotConfigPatch {
        title: Some("Decay".to_owned()),
        ..PlotConfigPatch::default()
    })
    .unwrap();
    s.change_plot_type(PlotType::Scatter);
    s.apply_preset(&JournalPreset::by_id("ieee").unwrap()).unwrap();

    assert_eq!(s.config().title(), "Decay");
    assert_eq!(s.config().plot_type(), PlotType::Scatter);
    assert_eq!(s.config().font_family(), FontFamily::TimesNewRoman);
    assert_eq!(s.config().font_size(), 8.0);
    assert_eq!(s.config().line_width(), 1.0);
}

#[test]
fn rejected_patch_leaves_config_untouched() {
    let mut s = PlotSession::new();
    let before = s.config().clone();
    let err = s
        .update_config(&PlotConfigPatch {
            title: Some("changed".to_owned()),
            font_size: Some(-3.0),
            ..PlotConfigPatch::default()
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert_eq!(s.config(), &before);
}

#[test]
fn reset_restores_config_only() {
    let mut s = PlotSession::new();
    s.load_example_data();
    s.change_plot_type(PlotType::Pie);
    s.reset_to_default();
    assert_eq!(s.config().plot_type(), PlotType::Line);
    assert_eq!(s.data().len(), 8);
}

#[test]
fn point_editing_by_id() {
    let mut s = PlotSession::new();
    let id = s.add_point();
    assert_eq!(s.data().len(), 4);
    assert!(s.update_point(id, Axis::X, Some(1.5)));
    assert!(s.update_point(id, Axis::Y, Some(2.5)));
    assert_eq!(s.data().valid_points().len(), 1);
    assert!(s.update_point(id, Axis::Y, None));
    assert!(s.data().valid_points().is_empty());
    assert!(s.remove_point(id));
    assert!(!s.remove_point(id));
    assert!(!s.update_point(id, Axis::X, Some(0.0)));
}

#[test]
fn csv_load_replaces_data() {
    let mut s = PlotSession::new();
    let import = s.load_csv("x,y\n1,4\n2,7\n3,bad\n");
    assert_eq!(import.rows, vec![(1.0, 4.0), (2.0, 7.0)]);
    assert_eq!(s.data().len(), 2);
    assert!(s.check_ready().is_ok());
}

#[test]
fn render_goes_through_the_frame_renderer() {
    let mut s = PlotSession::new();
    let mut surface = RecordingSurface::new(Canvas::DEFAULT);
    assert_eq!(
        s.render(&mut surface, &mut Rng64::new(0)),
        FrameOutcome::Placeholder
    );
    s.load_example_data();
    assert_eq!(
        s.render(&mut surface, &mut Rng64::new(0)),
        FrameOutcome::Plotted
    );
}
