//! Error types for volsample-fit

use thiserror::Error;

/// Errors that can occur during ellipse fitting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Too few points for a fit
    #[error("too few points: need at least {needed}, got {got}")]
    TooFewPoints {
        /// Minimum number of points
        needed: usize,
        /// Points supplied
        got: usize,
    },

    /// The scatter matrix has no inverse (collinear or too few distinct points)
    #[error("singular scatter matrix")]
    SingularScatter,

    /// The conic has `b^2 - ac == 0` and no defined center
    #[error("degenerate conic")]
    DegenerateConic,

    /// A fitted quantity is NaN or infinite
    #[error("non-finite {0} in fit")]
    NonFinite(&'static str),
}

/// Result type for fitting operations
pub type FitResult<T> = Result<T, FitError>;
