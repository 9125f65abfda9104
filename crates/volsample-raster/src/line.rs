//! 3-D Bresenham rasterization of lines and segments
//!
//! All traversal goes through [`bresenham_pass`], which walks one run of
//! `max(|d|)` steps along a direction. The driving axis advances on every
//! step; the two secondary axes advance when their error term turns
//! positive.
//!
//! Points outside the bound are never reported. Clipping is a normal
//! outcome, so none of these functions fail: degenerate input yields an
//! empty vector.

use log::trace;
use volsample_core::{Extent3, Offset3, Point3, out_of_canvas};

/// Axis advanced on every Bresenham step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivingAxis {
    X,
    Y,
    Z,
}

impl DrivingAxis {
    /// Pick the axis with the largest magnitude.
    ///
    /// Ties go to the first axis in `x, y, z` order: `X` wins whenever
    /// `|dx| >= |dy|` and `|dx| >= |dz|`, then `Y` wins whenever
    /// `|dy| >= |dz|`.
    pub fn classify(magnitudes: [i64; 3]) -> Self {
        let [ax, ay, az] = magnitudes;
        if ax >= ay && ax >= az {
            DrivingAxis::X
        } else if ay >= az {
            DrivingAxis::Y
        } else {
            DrivingAxis::Z
        }
    }

    /// Index of the axis in `[x, y, z]`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            DrivingAxis::X => 0,
            DrivingAxis::Y => 1,
            DrivingAxis::Z => 2,
        }
    }

    /// Indices of the two secondary axes.
    #[inline]
    fn secondaries(self) -> [usize; 2] {
        match self {
            DrivingAxis::X => [1, 2],
            DrivingAxis::Y => [0, 2],
            DrivingAxis::Z => [0, 1],
        }
    }
}

/// Outcome of one [`bresenham_pass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Every step was accepted; holds the final position.
    Completed(Point3),
    /// `accept` rejected a step.
    Stopped,
}

/// Walk `max(magnitudes)` steps from `origin` (exclusive).
///
/// `steps` gives the per-axis unit increment (`±1`). Each visited point is
/// handed to `accept`; returning `false` ends the pass early. A zero
/// magnitude vector performs no step and completes at `origin`. A step
/// that would leave the `i32` lattice also stops the pass.
pub fn bresenham_pass<F>(
    origin: Point3,
    magnitudes: [i64; 3],
    steps: [i32; 3],
    mut accept: F,
) -> Pass
where
    F: FnMut(Point3) -> bool,
{
    let driving = DrivingAxis::classify(magnitudes);
    let p = driving.index();
    let secondaries = driving.secondaries();
    let mp = magnitudes[p];

    let mut pos = origin.to_array();
    let mut err = secondaries.map(|s| 2 * magnitudes[s] - mp);

    for _ in 0..mp {
        for (e, &s) in err.iter_mut().zip(&secondaries) {
            if *e > 0 {
                let Some(next) = pos[s].checked_add(steps[s]) else {
                    return Pass::Stopped;
                };
                pos[s] = next;
                *e -= 2 * mp;
            }
            *e += 2 * magnitudes[s];
        }
        let Some(next) = pos[p].checked_add(steps[p]) else {
            return Pass::Stopped;
        };
        pos[p] = next;

        if !accept(Point3::from_array(pos)) {
            return Pass::Stopped;
        }
    }

    Pass::Completed(Point3::from_array(pos))
}

/// Points of a half-line from `origin` (exclusive) in direction `steps`,
/// in walking order. Repeats passes until one leaves the bound.
fn half_line(
    origin: Point3,
    magnitudes: [i64; 3],
    steps: [i32; 3],
    bound: Extent3,
) -> Vec<Point3> {
    let mut points = Vec::new();
    let mut current = origin;
    loop {
        let pass = bresenham_pass(current, magnitudes, steps, |pt| {
            if out_of_canvas(pt, bound) {
                false
            } else {
                points.push(pt);
                true
            }
        });
        match pass {
            Pass::Completed(last) => current = last,
            Pass::Stopped => break,
        }
    }
    points
}

/// All lattice points inside `bound` on the infinite line through `point`
/// with direction `direction`.
///
/// The result runs from the far end of the `-direction` half through
/// `point` to the far end of the `+direction` half, so a positive `x`
/// direction gives increasing `x`. The two halves mirror each other, so
/// `direction` and `-direction` cover the same set of points.
///
/// Returns an empty vector for a zero direction or an origin outside
/// `bound`.
///
/// # Examples
///
/// ```
/// use volsample_core::{Extent3, Offset3, Point3};
/// use volsample_raster::line_points;
///
/// let pts = line_points(
///     Point3::new(50, 50, 5),
///     Offset3::new(1, 0, 0),
///     Extent3::new(100, 100, 10),
/// );
/// assert_eq!(pts.len(), 100);
/// assert_eq!(pts[0], Point3::new(0, 50, 5));
/// assert_eq!(pts[99], Point3::new(99, 50, 5));
/// ```
pub fn line_points(point: Point3, direction: Offset3, bound: Extent3) -> Vec<Point3> {
    if direction.is_zero() || out_of_canvas(point, bound) {
        return Vec::new();
    }

    let magnitudes = direction.magnitudes();
    let forward_steps = direction.unit_steps();
    let backward_steps = forward_steps.map(|s| -s);

    let backward = half_line(point, magnitudes, backward_steps, bound);
    let forward = half_line(point, magnitudes, forward_steps, bound);

    let mut points = Vec::with_capacity(backward.len() + forward.len() + 1);
    points.extend(backward.into_iter().rev());
    points.push(point);
    points.extend(forward);

    trace!(
        "line through {:?} dir {:?}: {} points",
        point,
        direction,
        points.len()
    );
    points
}

/// Lattice points of the segment from `start` to `end`, clipped to `bound`.
///
/// - Identical endpoints, or both endpoints outside `bound`, give an empty
///   vector.
/// - If only `start` is outside, the endpoints are swapped so the walk
///   begins inside the volume; the result then runs from `end` toward
///   `start`.
/// - The walk stops at the far endpoint or at the first step that leaves
///   `bound`. The far endpoint is appended only when it lies inside
///   `bound`.
pub fn segment_points(start: Point3, end: Point3, bound: Extent3) -> Vec<Point3> {
    if start == end {
        return Vec::new();
    }
    let (start, end) = match (out_of_canvas(start, bound), out_of_canvas(end, bound)) {
        (true, true) => return Vec::new(),
        (true, false) => (end, start),
        _ => (start, end),
    };

    let delta = start.delta_to(end);
    let magnitudes = delta.map(i64::abs);
    let steps = delta.map(|d| if d > 0 { 1 } else { -1 });

    let mut points = vec![start];
    bresenham_pass(start, magnitudes, steps, |pt| {
        if pt == end || out_of_canvas(pt, bound) {
            false
        } else {
            points.push(pt);
            true
        }
    });
    if !out_of_canvas(end, bound) {
        points.push(end);
    }
    points
}

/// Rasterize the polyline through `vertices` in `frame`.
///
/// Consecutive vertex pairs are rasterized with [`segment_points`] and the
/// results concatenated, so a vertex shared by two segments appears twice.
/// If `close` is true, the last vertex is connected back to the first.
pub fn polyline_points(
    vertices: &[(i32, i32)],
    frame: i32,
    close: bool,
    bound: Extent3,
) -> Vec<Point3> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }

    let to_point = |&(x, y): &(i32, i32)| Point3::new(x, y, frame);
    let mut result = Vec::new();

    for pair in vertices.windows(2) {
        result.extend(segment_points(to_point(&pair[0]), to_point(&pair[1]), bound));
    }

    if close && let (Some(last), Some(first)) = (vertices.last(), vertices.first()) {
        result.extend(segment_points(to_point(last), to_point(first), bound));
    }

    result
}
