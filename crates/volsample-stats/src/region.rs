//! Local color statistics over an ellipsoidal region
//!
//! The region around a center point contains every lattice point inside
//! the volume with
//!
//! ```text
//! sum_i ((coord_i - center_i) / radius_i)^2 <= 1
//! ```
//!
//! An axis with radius 0 contributes nothing to the sum and is pinned to
//! the center coordinate, so a radius of `(r, r, 0)` samples a disc in the
//! center's frame and `(0, 0, 0)` samples the center pixel alone.

use crate::error::{StatsError, StatsResult};
use volsample_core::{CHANNELS, ColorVolume, Extent3, Point3, bound_local_region};

/// Default radius for local color: the center pixel only.
pub const DEFAULT_COLOR_RADIUS: Extent3 = Extent3::new(0, 0, 0);

/// Default radius for the local variance statistic.
pub const DEFAULT_VARIANCE_RADIUS: Extent3 = Extent3::new(3, 3, 0);

/// Lattice points of the ellipsoidal region around `point`, clipped to
/// `bound`.
///
/// Points are ordered by frame, then row, then column.
pub fn local_region(point: Point3, radius: Extent3, bound: Extent3) -> Vec<Point3> {
    let (lo, hi) = bound_local_region(point, radius, bound);
    let r = radius.to_array();
    let c = point.to_array();

    let term = |axis: usize, coord: i32| -> f64 {
        if r[axis] > 0 {
            let d = (coord as f64 - c[axis] as f64) / r[axis] as f64;
            d * d
        } else {
            0.0
        }
    };

    let mut points = Vec::new();
    for z in lo.z..=hi.z {
        let tz = term(2, z);
        for y in lo.y..=hi.y {
            let ty = term(1, y);
            for x in lo.x..=hi.x {
                if term(0, x) + ty + tz <= 1.0 {
                    points.push(Point3::new(x, y, z));
                }
            }
        }
    }
    points
}

fn region_colors<V>(volume: &V, point: Point3, radius: Extent3) -> StatsResult<Vec<[f64; 3]>>
where
    V: ColorVolume + ?Sized,
{
    local_region(point, radius, volume.extent())
        .into_iter()
        .map(|p| -> StatsResult<[f64; 3]> { Ok(volume.color_at(p)?.map(f64::from)) })
        .collect()
}

fn mean(colors: &[[f64; 3]]) -> [f64; 3] {
    let n = colors.len() as f64;
    let mut sum = [0.0; CHANNELS];
    for c in colors {
        for (s, v) in sum.iter_mut().zip(c) {
            *s += v;
        }
    }
    sum.map(|s| s / n)
}

/// Mean color over the region around `point`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyRegion`] if the region holds no pixel, which
/// happens when `point` lies outside the volume on an axis the radius
/// cannot reach back from.
pub fn local_color<V>(volume: &V, point: Point3, radius: Extent3) -> StatsResult<[f64; 3]>
where
    V: ColorVolume + ?Sized,
{
    let colors = region_colors(volume, point, radius)?;
    if colors.is_empty() {
        return Err(StatsError::EmptyRegion { point });
    }
    Ok(mean(&colors))
}

/// Local variance statistic around `point`.
///
/// Computes the Bessel-corrected sample variance of each channel over the
/// region and returns the sum of the three standard deviations. This sum
/// is the quantity variance thresholds are compared against.
///
/// # Errors
///
/// - [`StatsError::EmptyRegion`] if the region holds no pixel
/// - [`StatsError::InsufficientSamples`] if it holds a single pixel
pub fn local_variance<V>(volume: &V, point: Point3, radius: Extent3) -> StatsResult<f64>
where
    V: ColorVolume + ?Sized,
{
    let colors = region_colors(volume, point, radius)?;
    match colors.len() {
        0 => return Err(StatsError::EmptyRegion { point }),
        1 => {
            return Err(StatsError::InsufficientSamples {
                needed: 2,
                got: 1,
            });
        }
        _ => {}
    }

    let avg = mean(&colors);
    let mut ss = [0.0; CHANNELS];
    for c in &colors {
        for ch in 0..CHANNELS {
            let d = c[ch] - avg[ch];
            ss[ch] += d * d;
        }
    }

    let dof = (colors.len() - 1) as f64;
    Ok(ss.iter().map(|s| (s / dof).sqrt()).sum())
}

/// [`local_color`] for each point, in input order.
pub fn points_color<V>(volume: &V, points: &[Point3], radius: Extent3) -> StatsResult<Vec<[f64; 3]>>
where
    V: ColorVolume + ?Sized,
{
    points
        .iter()
        .map(|&p| local_color(volume, p, radius))
        .collect()
}

/// [`local_variance`] for each point, in input order.
pub fn points_variance<V>(volume: &V, points: &[Point3], radius: Extent3) -> StatsResult<Vec<f64>>
where
    V: ColorVolume + ?Sized,
{
    points
        .iter()
        .map(|&p| local_variance(volume, p, radius))
        .collect()
}
