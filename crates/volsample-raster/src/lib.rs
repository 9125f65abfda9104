//! volsample-raster - Exact-lattice rasterization
//!
//! This crate produces the integer lattice points that geometric
//! primitives pass through inside a bounded volume:
//!
//! - [`line_points`] - infinite line through a point with a direction
//! - [`segment_points`] - segment between two points
//! - [`polyline_points`] - chain of segments in one frame
//! - [`ellipse_points`] - boundary of an ellipse in one frame
//!
//! Traversal uses a 3-D Bresenham walk driven by the axis of largest
//! magnitude (see [`DrivingAxis`]). Results never contain points outside
//! the bound.

pub mod ellipse;
pub mod line;

pub use ellipse::{DEFAULT_POLYGON_STEP, ellipse_points, ellipse_polygon};
pub use line::{DrivingAxis, Pass, bresenham_pass, line_points, polyline_points, segment_points};
