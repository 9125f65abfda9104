//! Error types for volsample-stats

use thiserror::Error;
use volsample_core::Point3;

/// Errors that can occur while computing local statistics
#[derive(Debug, Error)]
pub enum StatsError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] volsample_core::Error),

    /// The sampling region around a point holds no pixel
    #[error("empty sampling region around {point:?}")]
    EmptyRegion {
        /// Region center
        point: Point3,
    },

    /// Too few pixels for a sample statistic
    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples {
        /// Minimum number of pixels
        needed: usize,
        /// Pixels in the region
        got: usize,
    },

    /// A point set that must be non-empty was empty
    #[error("empty point set: {0}")]
    EmptyPointSet(&'static str),
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
