//! Ellipse rasterization
//!
//! An ellipse is first approximated by a closed polygon, then every edge
//! of the polygon is rasterized as a segment in the ellipse's frame.

use crate::line::polyline_points;
use log::trace;
use volsample_core::{Ellipse, Extent3, Point3};

/// Default angular resolution of the polygon approximation, in degrees.
pub const DEFAULT_POLYGON_STEP: i32 = 3;

/// Polygon vertices approximating a full ellipse.
///
/// # Arguments
///
/// * `center` - Ellipse center `(x, y)`
/// * `axes` - Semi-axis lengths `(w, h)`; `w` lies along the rotated x axis
/// * `angle` - Rotation in whole degrees (any value, wrapped into `[0, 360)`)
/// * `step` - Angular step between vertices, in `1..=180` degrees
///
/// Vertices are taken at arc angles `0, step, 2·step, …` up to and including
/// 360, so the polygon closes on itself. Coordinates are rounded half to
/// even and consecutive duplicates are dropped. If only one distinct vertex
/// survives, two copies of `center` are returned instead. An out-of-range
/// `step` gives an empty vector.
pub fn ellipse_polygon(
    center: (i32, i32),
    axes: (i32, i32),
    angle: i32,
    step: i32,
) -> Vec<(i32, i32)> {
    if !(1..=180).contains(&step) {
        return Vec::new();
    }

    let (sin_a, cos_a) = (angle.rem_euclid(360) as f64).to_radians().sin_cos();
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let (w, h) = (axes.0 as f64, axes.1 as f64);

    let mut vertices: Vec<(i32, i32)> = Vec::new();
    let mut arc = 0;
    while arc < 360 + step {
        let t = (arc.min(360) as f64).to_radians();
        let x = w * t.cos();
        let y = h * t.sin();
        let vertex = (
            (cx + x * cos_a - y * sin_a).round_ties_even() as i32,
            (cy + x * sin_a + y * cos_a).round_ties_even() as i32,
        );
        if vertices.last() != Some(&vertex) {
            vertices.push(vertex);
        }
        arc += step;
    }

    if vertices.len() == 1 {
        return vec![center, center];
    }
    vertices
}

/// Lattice points on the boundary of `ellipse`, clipped to `bound`.
///
/// Axis lengths are truncated to integers and taken by absolute value; the
/// smaller one is laid along the rotated x axis. The angle is truncated to
/// whole degrees. Every polygon edge from [`ellipse_polygon`] (with
/// [`DEFAULT_POLYGON_STEP`]) is rasterized in frame `ellipse.center.z` and
/// the results are concatenated in vertex order.
pub fn ellipse_points(ellipse: &Ellipse, bound: Extent3) -> Vec<Point3> {
    let mut width = (ellipse.major as i32).abs();
    let mut height = (ellipse.minor as i32).abs();
    if width > height {
        std::mem::swap(&mut width, &mut height);
    }

    let center = ellipse.center;
    let vertices = ellipse_polygon(
        (center.x, center.y),
        (width, height),
        ellipse.angle as i32,
        DEFAULT_POLYGON_STEP,
    );
    // The polygon already ends on its first vertex
    let points = polyline_points(&vertices, ellipse.frame(), false, bound);

    trace!(
        "ellipse {:?}: {} vertices, {} points",
        ellipse,
        vertices.len(),
        points.len()
    );
    points
}
