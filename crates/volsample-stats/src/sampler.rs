//! Threshold sampling along rasterized lines and segments
//!
//! Two selection policies walk the points of a line or segment:
//!
//! - **Variance**: keep every point whose local variance statistic reaches
//!   the threshold, in rasterization order.
//! - **Gradient**: collapse each run of continuous points whose gradient
//!   reaches the threshold to its strongest point, and always keep the
//!   first and last point of the walk as boundary markers.
//!
//! The volume bound is taken from the volume itself.

use crate::error::StatsResult;
use crate::gradient::point_gradient;
use crate::region::local_variance;
use log::debug;
use volsample_core::{ColorVolume, Extent3, Offset3, Point3};
use volsample_raster::{line_points, segment_points};

/// Default variance threshold for variance sampling.
pub const DEFAULT_VARIANCE_THRESHOLD: f64 = 2.0;
/// Default local radius for variance sampling.
pub const DEFAULT_SAMPLING_RADIUS: Extent3 = Extent3::new(5, 5, 0);
/// Default gradient threshold for gradient sampling.
pub const DEFAULT_GRADIENT_THRESHOLD: f64 = 5.0;

/// Options for variance sampling
#[derive(Debug, Clone)]
pub struct VarianceSampling {
    /// Minimum local variance statistic for a point to be kept
    pub threshold: f64,
    /// Ellipsoidal radius of the local region
    pub radius: Extent3,
}

impl Default for VarianceSampling {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VARIANCE_THRESHOLD,
            radius: DEFAULT_SAMPLING_RADIUS,
        }
    }
}

impl VarianceSampling {
    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the local radius.
    pub fn with_radius(mut self, radius: Extent3) -> Self {
        self.radius = radius;
        self
    }
}

/// Options for gradient sampling
#[derive(Debug, Clone)]
pub struct GradientSampling {
    /// Minimum gradient magnitude for a point to join a run
    pub threshold: f64,
}

impl Default for GradientSampling {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GRADIENT_THRESHOLD,
        }
    }
}

impl GradientSampling {
    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Keep the points whose local variance statistic is `>= threshold`.
///
/// # Errors
///
/// Propagates errors of [`local_variance`], e.g. for a radius whose region
/// holds a single pixel.
pub fn select_by_variance<V>(
    volume: &V,
    points: &[Point3],
    options: &VarianceSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let mut selected = Vec::new();
    for &p in points {
        if local_variance(volume, p, options.radius)? >= options.threshold {
            selected.push(p);
        }
    }
    debug!(
        "variance sampling: {} of {} points >= {}",
        selected.len(),
        points.len(),
        options.threshold
    );
    Ok(selected)
}

/// Open run of qualifying points.
struct Run {
    last: Point3,
    best: Point3,
    best_gradient: f64,
}

impl Run {
    fn start(point: Point3, gradient: f64) -> Self {
        Self {
            last: point,
            best: point,
            best_gradient: gradient,
        }
    }

    fn extend(&mut self, point: Point3, gradient: f64) {
        self.last = point;
        if gradient >= self.best_gradient {
            self.best = point;
            self.best_gradient = gradient;
        }
    }
}

/// Thin a walk of points by gradient.
///
/// Points with gradient `>= threshold` form runs while each one is
/// continuous with the previous qualifying point. A run ends at the first
/// point that does not qualify or is not continuous, and is replaced by its
/// strongest point (the later one on ties). A point that breaks a run by
/// discontinuity opens the next run.
///
/// The output starts with the first walked point and ends with the last
/// one, whatever their gradients, so any walk of at least two points gives
/// at least two points. An empty walk gives an empty result.
pub fn thin_by_gradient<V>(
    volume: &V,
    points: &[Point3],
    options: &GradientSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Ok(Vec::new());
    };

    let mut selected = vec![first];
    let mut run: Option<Run> = None;

    for &p in points {
        let g = point_gradient(volume, p)?;
        let qualifies = g >= options.threshold;
        let continues = run.as_ref().is_some_and(|r| r.last.is_continuous_with(p));

        match (qualifies, continues) {
            (true, true) => {
                if let Some(r) = run.as_mut() {
                    r.extend(p, g);
                }
            }
            (true, false) => {
                if let Some(r) = run.replace(Run::start(p, g)) {
                    selected.push(r.best);
                }
            }
            (false, _) => {
                if let Some(r) = run.take() {
                    selected.push(r.best);
                }
            }
        }
    }
    if let Some(r) = run {
        selected.push(r.best);
    }
    selected.push(last);

    debug!(
        "gradient sampling: {} of {} points kept (threshold {})",
        selected.len(),
        points.len(),
        options.threshold
    );
    Ok(selected)
}

/// Variance sampling along the infinite line through `point`.
pub fn line_by_variance<V>(
    volume: &V,
    point: Point3,
    direction: Offset3,
    options: &VarianceSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let points = line_points(point, direction, volume.extent());
    select_by_variance(volume, &points, options)
}

/// Variance sampling along the segment from `start` to `end`.
pub fn segment_by_variance<V>(
    volume: &V,
    start: Point3,
    end: Point3,
    options: &VarianceSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let points = segment_points(start, end, volume.extent());
    select_by_variance(volume, &points, options)
}

/// Gradient sampling along the infinite line through `point`.
pub fn line_by_gradient<V>(
    volume: &V,
    point: Point3,
    direction: Offset3,
    options: &GradientSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let points = line_points(point, direction, volume.extent());
    thin_by_gradient(volume, &points, options)
}

/// Gradient sampling along the segment from `start` to `end`.
pub fn segment_by_gradient<V>(
    volume: &V,
    start: Point3,
    end: Point3,
    options: &GradientSampling,
) -> StatsResult<Vec<Point3>>
where
    V: ColorVolume + ?Sized,
{
    let points = segment_points(start, end, volume.extent());
    thin_by_gradient(volume, &points, options)
}
