use super::*;

#[test]
fn catalogue_has_every_type_once() {
    assert_eq!(PlotType::ALL.len(), 31);
    let mut names: Vec<&str> = PlotType::ALL.iter().map(|t| t.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 31);
}

#[test]
fn names_parse_back() {
    for &t in PlotType::ALL {
        assert_eq!(t.as_str().parse::<PlotType>().unwrap(), t);
        assert_eq!(t.to_string(), t.as_str());
    }
    assert!("sunburst".parse::<PlotType>().is_err());
}

#[test]
fn categories_partition_the_catalogue() {
    let counts: Vec<usize> = PlotCategory::ALL
        .iter()
        .map(|&c| PlotType::in_category(c).count())
        .collect();
    assert_eq!(counts, vec![10, 7, 4, 10]);
    assert_eq!(PlotType::PlotSurface.category(), PlotCategory::Volumetric);
    assert_eq!(PlotType::Heatmap.category(), PlotCategory::Basic);
}

#[test]
fn serde_uses_canonical_names() {
    let v = serde_json::to_value(PlotType::PlotWireframe).unwrap();
    assert_eq!(v, serde_json::json!("plot_wireframe"));
    let t: PlotType = serde_json::from_value(serde_json::json!("scatter3d")).unwrap();
    assert_eq!(t, PlotType::Scatter3d);
    assert!(serde_json::from_value::<PlotType>(serde_json::json!("nope")).is_err());
}

#[test]
fn category_labels_are_catalogue_headings() {
    let labels = PlotCategory::ALL.map(PlotCategory::label);
    assert_eq!(
        labels,
        ["Basic", "Gridded Data", "Irregular Grid", "3D & Volumetric"]
    );
}
