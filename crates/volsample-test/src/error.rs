//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression tests
#[derive(Debug, Error)]
pub enum TestError {
    /// Synthetic frames could not be wrapped as a volume
    #[error("failed to build volume: {0}")]
    Volume(#[from] volsample_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
