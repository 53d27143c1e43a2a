use super::*;

#[test]
fn defaults_match_preview() {
    let c = PlotConfig::default();
    assert_eq!(c.title(), "My Scientific Plot");
    assert_eq!(c.plot_type(), PlotType::Line);
    assert_eq!(c.font_family(), FontFamily::Arial);
    assert_eq!(c.colors().len(), 5);
    assert_eq!(c.colors().primary().to_string(), "#4338ca");
    assert!(c.show_grid() && c.show_legend());
}

#[test]
fn patch_produces_new_snapshot() {
    let base = PlotConfig::default();
    let patch = PlotConfigPatch {
        title: Some("Decay".to_owned()),
        plot_type: Some(PlotType::Scatter),
        ..PlotConfigPatch::default()
    };
    let next = base.apply(&patch).unwrap();
    assert_eq!(next.title(), "Decay");
    assert_eq!(next.plot_type(), PlotType::Scatter);
    assert_eq!(base.title(), "My Scientific Plot");
    assert_eq!(base.plot_type(), PlotType::Line);
}

#[test]
fn numeric_fields_clamp_into_range() {
    let next = PlotConfig::default()
        .apply(&PlotConfigPatch {
            font_size: Some(100.0),
            line_width: Some(0.1),
            title_size: Some(4.0),
            ..PlotConfigPatch::default()
        })
        .unwrap();
    assert_eq!(next.font_size(), limits::FONT_SIZE.1);
    assert_eq!(next.line_width(), limits::LINE_WIDTH.0);
    assert_eq!(next.title_size(), limits::TITLE_SIZE.0);
}

#[test]
fn non_positive_sizes_are_rejected() {
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let err = PlotConfig::default().apply(&PlotConfigPatch {
            label_size: Some(bad),
            ..PlotConfigPatch::default()
        });
        assert!(err.is_err(), "accepted label_size {bad}");
    }
}

#[test]
fn font_family_allow_list() {
    assert_eq!("times new roman".parse::<FontFamily>().unwrap(), FontFamily::TimesNewRoman);
    assert!("Papyrus".parse::<FontFamily>().is_err());
    for f in FontFamily::ALL {
        assert_eq!(f.name().parse::<FontFamily>().unwrap(), f);
    }
}

#[test]
fn palette_cycles_and_rejects_empty() {
    assert!(Palette::new(vec![]).is_err());
    let p = Palette::from_hex(&["#ff0000", "#00ff00"]).unwrap();
    assert_eq!(p.cyclic(0), p.cyclic(2));
    assert_eq!(p.cyclic(1), p.cyclic(5));
    assert!(Palette::from_hex(&["#ff0000", "red"]).is_err());
}

#[test]
fn json_config_validates_like_patches() {
    let c = PlotConfig::from_json(
        r##"{"title":"T","plot_type":"pie","font_family":"Georgia","colors":["#000000"]}"##,
    )
    .unwrap();
    assert_eq!(c.title(), "T");
    assert_eq!(c.plot_type(), PlotType::Pie);
    assert_eq!(c.font_family(), FontFamily::Georgia);
    assert_eq!(c.colors().len(), 1);
    assert_eq!(c.x_label(), "X Axis");

    assert!(PlotConfig::from_json(r#"{"plot_type":"sunburst"}"#).is_err());
    assert!(PlotConfig::from_json(r#"{"font_family":"Papyrus"}"#).is_err());
    assert!(PlotConfig::from_json(r#"{"colors":[]}"#).is_err());
    assert!(PlotConfig::from_json(r#"{"unknown_field":1}"#).is_err());

    let typed: PlotConfig = serde_json::from_str(r#"{"line_width":9}"#).unwrap();
    assert_eq!(typed.line_width(), limits::LINE_WIDTH.1);
}
