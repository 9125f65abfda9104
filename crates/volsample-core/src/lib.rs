//! volsample core - Basic data structures for volume sampling
//!
//! This crate provides the fundamental data structures used throughout
//! the volsample crates:
//!
//! - [`Point3`] / [`Offset3`] / [`Extent3`] - Lattice point, displacement, extent
//! - [`ColorVolume`] / [`FrameSequence`] - Read-only access to a frame sequence
//! - [`Ellipse`] - Ellipse parameters
//! - [`bounds`] - Canvas containment and local-region clipping
//!
//! The volume axes are column, row and frame index, in that order.

pub mod bounds;
pub mod ellipse;
pub mod error;
pub mod geom;
pub mod volume;

pub use bounds::{bound_local_region, out_of_canvas, points_continuous};
pub use ellipse::Ellipse;
pub use error::{Error, Result};
pub use geom::{Extent3, Offset3, Point3};
pub use volume::{ColorVolume, FrameSequence};

/// Number of color channels carried by every pixel.
pub const CHANNELS: usize = 3;
