//! Synthetic 3D scenes flattened with fixed oblique projections.
//!
//! None of these read the user's points; each draws the same geometry every frame. Depth order
//! is painter's algorithm: geometry is sorted farthest first and drawn in that order.

use std::f64::consts::PI;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::plots::{PlotContext, circle, polygon, polyline};
use crate::render::surface::{Paint, RenderSurface, Stroke};

const AXIS_X: Rgba8 = Rgba8::rgb(0xd6, 0x27, 0x28);
const AXIS_Y: Rgba8 = Rgba8::rgb(0x2c, 0xa0, 0x2c);
const AXIS_Z: Rgba8 = Rgba8::rgb(0x1f, 0x77, 0xb4);

const SPIRAL_POINTS: usize = 50;
const SURFACE_RES: usize = 20;
const VOXEL_GRID: usize = 12;
const VOXEL_SIZE: f64 = 8.0;

fn axis(origin: Point, tip: Vec2) -> BezPath {
    polyline([origin, origin + tip])
}

/// A projected point and the depth it was sorted by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Projected {
    pub at: Point,
    pub z: f64,
}

/// The 50-point shrinking spiral, projected about `origin` and sorted by ascending `z`.
pub(crate) fn spiral(origin: Point) -> Vec<Projected> {
    let last = (SPIRAL_POINTS - 1) as f64;
    let mut points = (0..SPIRAL_POINTS)
        .map(|i| {
            let f = i as f64 / last;
            let t = f * PI * 6.0;
            let radius = 40.0 * (1.0 - f * 0.5);
            let (x, y, z) = (t.cos() * radius, t.sin() * radius, i as f64 * 3.0 - 75.0);
            Projected {
                at: Point::new(
                    origin.x + x * 0.866 - y * 0.5,
                    origin.y - z * 0.7 - x * 0.25 - y * 0.25,
                ),
                z,
            }
        })
        .collect::<Vec<_>>();
    points.sort_by(|a, b| a.z.total_cmp(&b.z));
    points
}

pub(crate) fn trajectory(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface, connected: bool) {
    let canvas = ctx.canvas();
    let origin = Point::new(canvas.w() / 2.0, canvas.h() / 2.0 + 30.0);
    let color = ctx.primary();

    let scale = 120.0;
    surface.stroke_path(&axis(origin, Vec2::new(scale, -scale * 0.2)), Stroke::new(AXIS_X, 3.0));
    surface.stroke_path(
        &axis(origin, Vec2::new(-scale * 0.8, -scale * 0.2)),
        Stroke::new(AXIS_Y, 3.0),
    );
    surface.stroke_path(&axis(origin, Vec2::new(0.0, -scale)), Stroke::new(AXIS_Z, 3.0));

    let points = spiral(origin);
    if connected {
        surface.stroke_path(&polyline(points.iter().map(|p| p.at)), Stroke::new(color, 2.0));
    }
    for p in &points {
        let depth = (p.z + 75.0) / 150.0;
        let alpha = ((0.4 + depth * 0.6) * 255.0).floor().clamp(0.0, 255.0) as u8;
        surface.fill_path(
            &circle(p.at, 3.0 + depth * 5.0),
            Paint::Solid(color.with_alpha(alpha)),
        );
    }
}

/// A node of the synthetic surface grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SurfaceNode {
    pub at: Point,
    /// Unscaled surface height, roughly `-2..=2`.
    pub height: f64,
    pub depth: f64,
}

/// Row-major `20 x 20` samples of a damped radial sine, projected about `origin`.
pub(crate) fn surface_nodes(origin: Point) -> Vec<SurfaceNode> {
    let res = SURFACE_RES as f64;
    let scale = 80.0 / 4.0;
    let mut nodes = Vec::with_capacity(SURFACE_RES * SURFACE_RES);
    for i in 0..SURFACE_RES {
        for j in 0..SURFACE_RES {
            let u = (i as f64 - res / 2.0) / res * 4.0;
            let v = (j as f64 - res / 2.0) / res * 4.0;
            let r = u.hypot(v);
            let height = r.sin() * (-r * 0.3).exp() * 2.0;
            let (x, y, z) = (u * scale, v * scale, height * scale);
            nodes.push(SurfaceNode {
                at: Point::new(
                    origin.x + x * 0.866 - y * 0.5,
                    origin.y - z * 0.8 - x * 0.3 - y * 0.3,
                ),
                height,
                depth: x + y + z,
            });
        }
    }
    nodes
}

/// A shaded cell between four neighboring surface nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Quad {
    /// Corners in drawing order around the cell.
    pub corners: [Point; 4],
    pub mean_height: f64,
    pub depth: f64,
}

/// Quads over neighboring grid nodes, sorted by ascending mean depth.
pub(crate) fn surface_quads(nodes: &[SurfaceNode]) -> Vec<Quad> {
    let at = |i: usize, j: usize| nodes[i * SURFACE_RES + j];
    let mut quads = Vec::with_capacity((SURFACE_RES - 1) * (SURFACE_RES - 1));
    for i in 0..SURFACE_RES - 1 {
        for j in 0..SURFACE_RES - 1 {
            let cell = [at(i, j), at(i, j + 1), at(i + 1, j + 1), at(i + 1, j)];
            quads.push(Quad {
                corners: cell.map(|n| n.at),
                mean_height: cell.iter().map(|n| n.height).sum::<f64>() / 4.0,
                depth: cell.iter().map(|n| n.depth).sum::<f64>() / 4.0,
            });
        }
    }
    quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    quads
}

pub(crate) fn surface(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface, wireframe: bool) {
    let canvas = ctx.canvas();
    let nodes = surface_nodes(Point::new(canvas.w() / 2.0, canvas.h() / 2.0 + 40.0));

    if wireframe {
        let stroke = Stroke::new(ctx.primary(), 1.0);
        for i in 0..SURFACE_RES {
            let row = (0..SURFACE_RES).map(|j| nodes[i * SURFACE_RES + j].at);
            surface.stroke_path(&polyline(row), stroke);
        }
        for j in 0..SURFACE_RES {
            let column = (0..SURFACE_RES).map(|i| nodes[i * SURFACE_RES + j].at);
            surface.stroke_path(&polyline(column), stroke);
        }
        return;
    }

    for quad in surface_quads(&nodes) {
        let intensity = (quad.mean_height + 2.0) / 4.0;
        let hue = 240.0 + intensity * 120.0;
        let path = polygon(quad.corners);
        surface.fill_path(
            &path,
            Paint::Solid(Rgba8::from_hsl(hue, 0.8, 0.5 + intensity * 0.3)),
        );
        surface.stroke_path(&path, Stroke::new(Rgba8::from_hsl(hue, 0.6, 0.4), 0.5));
    }
}

/// A filled cell of the voxel volume, already placed on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Voxel {
    pub origin: Point,
    pub size: f64,
    pub value: f64,
    pub depth: usize,
}

/// Cells of the `12^3` volume whose density exceeds 0.2, sorted by `x + y + z` (stable).
pub(crate) fn voxel_cells(start: Point) -> Vec<Voxel> {
    let half = VOXEL_GRID as f64 / 2.0;
    let mut voxels = Vec::new();
    for x in 0..VOXEL_GRID {
        for y in 0..VOXEL_GRID {
            for z in 0..VOXEL_GRID {
                let (cx, cy, cz) = (x as f64 - half, y as f64 - half, z as f64 - half);
                let distance = (cx * cx + cy * cy + cz * cz).sqrt();
                let value = (1.0 - distance / half).max(0.0)
                    * (1.0 + 0.3 * cx.sin() * cy.cos() * cz.sin());
                if value <= 0.2 {
                    continue;
                }
                voxels.push(Voxel {
                    origin: Point::new(
                        start.x + x as f64 * VOXEL_SIZE * 0.8 + z as f64 * VOXEL_SIZE * 0.4,
                        start.y + y as f64 * VOXEL_SIZE * 0.6 + z as f64 * VOXEL_SIZE * 0.2,
                    ),
                    size: VOXEL_SIZE * (0.7 + value * 0.3),
                    value,
                    depth: x + y + z,
                });
            }
        }
    }
    voxels.sort_by_key(|v| v.depth);
    voxels
}

pub(crate) fn voxels(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let colors = ctx.config.colors();
    let start = Point::new(ctx.area.left() + 80.0, ctx.area.top() + 60.0);
    let last_slot = colors.len().saturating_sub(1) as f64;

    for v in voxel_cells(start) {
        let opacity = v.value * 0.9;
        let base = colors.cyclic((v.value * last_slot).floor() as usize);
        let (o, s) = (v.origin, v.size);

        surface.fill_rect(
            Rect::from_origin_size(o, (s, s)),
            Paint::Solid(base.with_opacity(opacity)),
        );
        let top = polygon([
            o,
            Point::new(o.x + s * 0.4, o.y - s * 0.3),
            Point::new(o.x + s * 1.4, o.y - s * 0.3),
            Point::new(o.x + s, o.y),
        ]);
        surface.fill_path(&top, Paint::Solid(base.shade(60).with_opacity(opacity)));
        let right = polygon([
            Point::new(o.x + s, o.y),
            Point::new(o.x + s * 1.4, o.y - s * 0.3),
            Point::new(o.x + s * 1.4, o.y + s * 0.7),
            Point::new(o.x + s, o.y + s),
        ]);
        surface.fill_path(&right, Paint::Solid(base.shade(-40).with_opacity(opacity)));
        surface.stroke_rect(
            Rect::from_origin_size(o, (s, s)),
            Stroke::new(base.shade(-80).with_opacity(opacity), 0.5),
        );
    }
}

/// Centers of the `10 x 10` placeholder point cloud around `origin`.
pub(crate) fn placeholder_cloud(origin: Point) -> Vec<Point> {
    let (n, height) = (10, 80.0);
    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let (fi, fj) = (i as f64, j as f64);
            let base = Point::new(
                origin.x + (fi - n as f64 / 2.0) * 15.0,
                origin.y + (fj - n as f64 / 2.0) * 7.5,
            );
            let h = (fi / 2.0).sin() * (fj / 2.0).cos() * height / 3.0 + height / 3.0;
            points.push(Point::new(base.x - fj * 7.5, base.y - h - fi * 7.5));
        }
    }
    points
}

pub(crate) fn placeholder(ctx: &PlotContext<'_>, surface: &mut dyn RenderSurface) {
    let canvas = ctx.canvas();
    let origin = Point::new(canvas.w() / 2.0, canvas.h() / 2.0 + 50.0);
    let colors = ctx.config.colors().as_slice();
    let slot = |i: usize, fallback: Rgba8| colors.get(i).copied().unwrap_or(fallback);
    let length = 100.0;

    let axes = [
        (Vec2::new(length, -length / 2.0), slot(0, Rgba8::rgb(0xe7, 0x4c, 0x3c))),
        (Vec2::new(-length, -length / 2.0), slot(1, Rgba8::rgb(0x2e, 0xcc, 0x71))),
        (Vec2::new(0.0, -length), slot(2, Rgba8::rgb(0x34, 0x98, 0xdb))),
    ];
    for (tip, color) in axes {
        surface.stroke_path(&axis(origin, tip), Stroke::new(color, 2.0));
    }

    let dot = Paint::Solid(slot(3, Rgba8::rgb(0x9b, 0x59, 0xb6)));
    for p in placeholder_cloud(origin) {
        surface.fill_path(&circle(p, 2.0), dot);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plots/volumetric.rs"]
mod tests;
