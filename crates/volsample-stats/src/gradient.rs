//! Scharr edge gradient
//!
//! The gradient of a point is computed from channel 0 of the 3x3
//! neighbourhood around it in its own frame. Both kernels are applied by
//! correlation and normalized by 32.

use crate::error::StatsResult;
use volsample_core::{ColorVolume, Error, Point3};

type Kernel3 = [[f64; 3]; 3];

/// Response to change along columns.
const SCHARR_KERNEL_DX: Kernel3 = [[3.0, 0.0, -3.0], [10.0, 0.0, -10.0], [3.0, 0.0, -3.0]];
/// Response to change along rows.
const SCHARR_KERNEL_DY: Kernel3 = [[3.0, 10.0, 3.0], [0.0, 0.0, 0.0], [-3.0, -10.0, -3.0]];
const SCHARR_NORM: f64 = 32.0;

/// Scharr gradient magnitude at `point`.
///
/// Returns 0 for points within one pixel of the frame border, where the
/// 3x3 window would leave the frame.
///
/// # Errors
///
/// Returns [`Error::OutOfVolume`] (wrapped) if `point.z` is not a frame of
/// the volume.
pub fn point_gradient<V>(volume: &V, point: Point3) -> StatsResult<f64>
where
    V: ColorVolume + ?Sized,
{
    let extent = volume.extent();
    if point.z < 0 || point.z as i64 >= extent.z as i64 {
        return Err(Error::OutOfVolume {
            x: point.x,
            y: point.y,
            z: point.z,
        }
        .into());
    }

    let (w, h) = (extent.x as i64, extent.y as i64);
    let (x, y) = (point.x as i64, point.y as i64);
    if x < 1 || y < 1 || x > w - 2 || y > h - 2 {
        return Ok(0.0);
    }

    let mut gx = 0.0;
    let mut gy = 0.0;
    for (i, dy) in (-1..=1).enumerate() {
        for (j, dx) in (-1..=1).enumerate() {
            let neighbour = Point3::new(point.x + dx, point.y + dy, point.z);
            let v = volume.color_at(neighbour)?[0] as f64;
            gx += SCHARR_KERNEL_DX[i][j] * v;
            gy += SCHARR_KERNEL_DY[i][j] * v;
        }
    }

    Ok((gx / SCHARR_NORM).hypot(gy / SCHARR_NORM))
}

/// [`point_gradient`] for each point, in input order.
pub fn points_gradient<V>(volume: &V, points: &[Point3]) -> StatsResult<Vec<f64>>
where
    V: ColorVolume + ?Sized,
{
    points.iter().map(|&p| point_gradient(volume, p)).collect()
}
