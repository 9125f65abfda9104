//! volsample - 3-D spatial sampling over image sequences
//!
//! A sequence of equally sized color frames is treated as a volume
//! addressed by `(column, row, frame)`. This crate gathers the pieces
//! that work on such a volume:
//!
//! - Clipped Bresenham rasterization of lines, segments and ellipses
//!   ([`raster`])
//! - Local color, local variance and Scharr gradient magnitude, plus
//!   threshold sampling of lines by variance or gradient ([`stats`])
//! - Color histogram comparison of two point sets ([`stats::histogram`])
//! - Direct least-squares ellipse fitting ([`fit`])
//!
//! # Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use volsample::stats::{VarianceSampling, segment_by_variance};
//! use volsample::{FrameSequence, Point3};
//!
//! // Dark left half, bright right half
//! let frame = RgbImage::from_fn(40, 20, |x, _| {
//!     if x < 20 { Rgb([0, 0, 0]) } else { Rgb([200, 200, 200]) }
//! });
//! let frames = vec![frame];
//! let volume = FrameSequence::new(&frames).unwrap();
//!
//! let pts = segment_by_variance(
//!     &volume,
//!     Point3::new(0, 10, 0),
//!     Point3::new(39, 10, 0),
//!     &VarianceSampling::default(),
//! )
//! .unwrap();
//! assert!(pts.iter().all(|p| (15..25).contains(&p.x)));
//! ```

// Re-export core types (lattice types and volume access)
pub use volsample_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use volsample_fit as fit;
pub use volsample_raster as raster;
pub use volsample_stats as stats;
