use super::*;

#[test]
fn ids_are_unique_and_stable_across_edits() {
    let mut set = DataSet::with_empty_rows(3);
    let ids: Vec<PointId> = set.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PointId(0), PointId(1), PointId(2)]);

    assert!(set.remove(PointId(1)));
    let fresh = set.push_empty();
    assert_eq!(fresh, PointId(3));
    assert!(set.update(PointId(2), Axis::X, Some(1.5)));
    assert_eq!(set.get(PointId(2)).unwrap().x, Some(1.5));
    assert!(!set.update(PointId(1), Axis::Y, Some(0.0)));
    assert!(!set.remove(PointId(1)));
}

#[test]
fn incomplete_points_are_kept_but_not_valid() {
    let mut set = DataSet::new();
    let a = set.push(Some(1.0), None);
    set.push(Some(2.0), Some(3.0));
    assert_eq!(set.len(), 2);
    assert!(set.get(a).unwrap().is_incomplete());
    assert_eq!(set.valid_points(), vec![ValidPoint { x: 2.0, y: 3.0 }]);

    set.update(a, Axis::Y, Some(5.0));
    assert_eq!(set.valid_points().len(), 2);
    assert_eq!(set.valid_points()[0], ValidPoint { x: 1.0, y: 5.0 });
}

#[test]
fn non_finite_values_are_stored_as_absent() {
    let mut set = DataSet::new();
    let id = set.push(Some(f64::NAN), Some(f64::INFINITY));
    let p = set.get(id).unwrap();
    assert_eq!((p.x, p.y), (None, None));
    set.update(id, Axis::X, Some(f64::NEG_INFINITY));
    assert_eq!(set.get(id).unwrap().x, None);
}

#[test]
fn replace_keeps_ids_monotonic() {
    let mut set = DataSet::from_pairs(EXAMPLE_PAIRS);
    assert_eq!(set.valid_points().len(), 8);
    set.replace_with_pairs([(0.0, 1.0)]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().id, PointId(8));
}
