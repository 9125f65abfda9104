//! Parallel batch statistics
//!
//! Each function matches its sequential counterpart point for point and
//! preserves input order. Points are independent, so the work is spread
//! over the rayon thread pool with no shared mutable state. The volume
//! only needs to be `Sync`.

use crate::error::StatsResult;
use crate::gradient::point_gradient;
use crate::region::{local_color, local_variance};
use rayon::prelude::*;
use volsample_core::{ColorVolume, Extent3, Point3};

/// Parallel [`crate::points_color`].
pub fn par_points_color<V>(
    volume: &V,
    points: &[Point3],
    radius: Extent3,
) -> StatsResult<Vec<[f64; 3]>>
where
    V: ColorVolume + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&p| local_color(volume, p, radius))
        .collect()
}

/// Parallel [`crate::points_variance`].
pub fn par_points_variance<V>(
    volume: &V,
    points: &[Point3],
    radius: Extent3,
) -> StatsResult<Vec<f64>>
where
    V: ColorVolume + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&p| local_variance(volume, p, radius))
        .collect()
}

/// Parallel [`crate::points_gradient`].
pub fn par_points_gradient<V>(volume: &V, points: &[Point3]) -> StatsResult<Vec<f64>>
where
    V: ColorVolume + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|&p| point_gradient(volume, p))
        .collect()
}
