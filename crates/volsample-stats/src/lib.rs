//! volsample-stats - Local statistics and threshold sampling
//!
//! This crate computes statistics of a color volume around points and
//! uses them to select points along lines:
//!
//! - Local color and local variance over an ellipsoidal region
//! - Scharr gradient magnitude of a single point
//! - Batch variants, sequential and parallel (rayon)
//! - Threshold sampling of lines and segments by variance or gradient
//! - Color histogram comparison of two point sets

mod error;
pub mod gradient;
pub mod histogram;
pub mod parallel;
pub mod region;
pub mod sampler;

pub use error::{StatsError, StatsResult};

pub use gradient::{point_gradient, points_gradient};
pub use histogram::{ColorHistogram, compare_histograms};
pub use parallel::{par_points_color, par_points_gradient, par_points_variance};
pub use region::{
    DEFAULT_COLOR_RADIUS, DEFAULT_VARIANCE_RADIUS, local_color, local_region, local_variance,
    points_color, points_variance,
};
pub use sampler::{
    GradientSampling, VarianceSampling, line_by_gradient, line_by_variance, segment_by_gradient,
    segment_by_variance, select_by_variance, thin_by_gradient,
};
