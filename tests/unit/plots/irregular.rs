use super::*;
use crate::foundation::core::Canvas;

#[test]
fn samples_stay_inside_the_plot_area() {
    let area = PlotArea::standard(Canvas::DEFAULT);
    let mut rng = Rng64::new(7);
    let samples = random_samples(&area, &mut rng);
    assert_eq!(samples.len(), 25);
    for s in &samples {
        assert!(s.at.x >= 50.0 && s.at.x < 550.0);
        assert!(s.at.y >= 50.0 && s.at.y < 350.0);
        assert!((-1.0..=1.0).contains(&s.value));
    }
}

#[test]
fn same_seed_same_samples() {
    let area = PlotArea::standard(Canvas::DEFAULT);
    let a = random_samples(&area, &mut Rng64::new(42));
    let b = random_samples(&area, &mut Rng64::new(42));
    assert_eq!(a, b);
}

#[test]
fn keeps_only_short_edged_triangles() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(0.0, 50.0),
        Point::new(300.0, 300.0),
    ];
    assert_eq!(short_edge_triangles(&points), vec![[0, 1, 2]]);
}

#[test]
fn edge_of_exactly_one_hundred_is_rejected() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 10.0),
    ];
    assert!(short_edge_triangles(&points).is_empty());
}

#[test]
fn value_index_is_clamped() {
    assert_eq!(value_index(-1.0, 5), 0);
    assert_eq!(value_index(0.0, 5), 2);
    assert_eq!(value_index(1.0, 5), 4);
    assert_eq!(value_index(0.999, 1), 0);
}
