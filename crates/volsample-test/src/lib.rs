//! volsample-test - Regression test framework for volsample
//!
//! This crate provides a small regression test framework in the style of
//! a `regutils`-type harness, supporting two modes:
//!
//! - **Compare**: Fail on any value that differs from its expectation
//! - **Display**: Also print every compared value (visual inspection)
//!
//! It also builds the synthetic volumes the tests sample, so no test data
//! files are needed.
//!
//! # Usage
//!
//! ```ignore
//! use volsample_test::{RegParams, frame_sequence, uniform_frames};
//!
//! let frames = uniform_frames(20, 20, 1, [10, 10, 10]);
//! let seq = frame_sequence(&frames)?;
//! let mut rp = RegParams::new("local_color");
//! rp.compare_values(10.0, color[0], 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
mod volumes;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use volumes::{
    checkerboard_frames, frame_sequence, ramp_frames, uniform_frames, vertical_edge_frames,
};
