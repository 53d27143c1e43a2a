use super::*;
use crate::model::plot_type::PlotType;

#[test]
fn builtin_ids_resolve() {
    for id in ["default", "nature", "science", "ieee"] {
        assert!(JournalPreset::by_id(id).is_some(), "missing preset {id}");
    }
    assert!(JournalPreset::by_id("cell").is_none());
    assert_eq!(
        JournalPreset::by_id("IEEE").unwrap().font_family,
        FontFamily::TimesNewRoman
    );
}

#[test]
fn apply_overwrites_only_style_fields() {
    let base = PlotConfig::default()
        .apply(&PlotConfigPatch {
            title: Some("Growth".to_owned()),
            x_label: Some("t".to_owned()),
            plot_type: Some(PlotType::Bar),
            show_grid: Some(false),
            ..PlotConfigPatch::default()
        })
        .unwrap();
    let nature = JournalPreset::by_id("nature").unwrap();
    let out = nature.apply_to(&base).unwrap();

    assert_eq!(out.title(), "Growth");
    assert_eq!(out.x_label(), "t");
    assert_eq!(out.y_label(), base.y_label());
    assert_eq!(out.plot_type(), PlotType::Bar);
    assert!(!out.show_grid());
    assert_eq!(out.show_legend(), base.show_legend());

    assert_eq!(out.font_size(), 8.0);
    assert_eq!(out.title_size(), 12.0);
    assert_eq!(out.label_size(), 10.0);
    assert_eq!(out.line_width(), 1.0);
    assert_eq!(out.colors().primary(), Rgba8::BLACK);
    assert_eq!(out.background_color(), Rgba8::WHITE);
}

#[test]
fn palettes_resolve_and_are_non_empty() {
    for def in PALETTES {
        assert!(!def.colors.is_empty());
        assert_eq!(palette_by_id(def.id).unwrap().name, def.name);
    }
    assert!(palette_by_id("neon").is_none());
}

#[test]
fn builtin_presets_own_their_palettes() {
    let presets = JournalPreset::builtin();
    assert_eq!(presets.len(), 4);
    for p in &presets {
        assert_eq!(p.colors.len(), 5, "{}", p.id);
    }
    assert_eq!(presets[0].colors, SCIENTIFIC.palette());
    assert_eq!(
        presets[3].colors.primary(),
        Rgba8::rgb(0x00, 0x72, 0xb2)
    );
}
