use super::*;

#[test]
fn spiral_is_sorted_far_to_near() {
    let points = spiral(Point::new(300.0, 230.0));
    assert_eq!(points.len(), 50);
    assert!(points.windows(2).all(|w| w[0].z <= w[1].z));
    assert_eq!(points[0].z, -75.0);
    assert_eq!(points[49].z, 72.0);
}

#[test]
fn spiral_first_point_projection() {
    // t = 0, radius 40: (40, 0, -75)
    let points = spiral(Point::new(0.0, 0.0));
    let p = points[0].at;
    assert!((p.x - 34.64).abs() < 1e-9);
    assert!((p.y - (52.5 - 10.0)).abs() < 1e-9);
}

#[test]
fn surface_quads_cover_grid_and_are_depth_sorted() {
    let nodes = surface_nodes(Point::new(300.0, 240.0));
    assert_eq!(nodes.len(), 400);
    let quads = surface_quads(&nodes);
    assert_eq!(quads.len(), 19 * 19);
    assert!(quads.windows(2).all(|w| w[0].depth <= w[1].depth));
    assert!(quads.iter().all(|q| q.mean_height.abs() <= 2.0));
}

#[test]
fn voxels_are_dense_only_and_depth_sorted() {
    let voxels = voxel_cells(Point::new(130.0, 110.0));
    assert!(!voxels.is_empty());
    assert!(voxels.len() < 12 * 12 * 12);
    assert!(voxels.iter().all(|v| v.value > 0.2));
    assert!(voxels.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn voxel_at_center_is_largest() {
    let voxels = voxel_cells(Point::new(0.0, 0.0));
    let center = voxels
        .iter()
        .find(|v| v.depth == 18 && v.value >= 1.0)
        .expect("center voxel");
    assert!((center.size - 8.0 * (0.7 + center.value * 0.3)).abs() < 1e-12);
}

#[test]
fn placeholder_cloud_shape() {
    let cloud = placeholder_cloud(Point::new(300.0, 250.0));
    assert_eq!(cloud.len(), 100);
    // i = 0, j = 0: height = 80 / 3
    let first = cloud[0];
    assert!((first.x - (300.0 - 75.0)).abs() < 1e-9);
    assert!((first.y - (250.0 - 37.5 - 80.0 / 3.0)).abs() < 1e-9);
}
