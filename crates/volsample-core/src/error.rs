//! Error types for volsample-core
//!
//! Provides a unified error type for the lattice types and the
//! color-volume provider. Rasterization never reports errors: clipping
//! against the volume is an expected outcome, not a failure.

use thiserror::Error;

/// volsample core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty input where at least one element is required
    #[error("null or empty input: {0}")]
    EmptyInput(&'static str),

    /// Frames of one sequence disagree in size
    #[error("incompatible frame sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Lattice point outside the addressable volume
    #[error("point ({x}, {y}, {z}) is outside the volume")]
    OutOfVolume { x: i32, y: i32, z: i32 },
}

/// Result type alias for volsample core operations
pub type Result<T> = std::result::Result<T, Error>;
