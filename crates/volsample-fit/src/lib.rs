//! volsample-fit - Ellipse fitting
//!
//! Direct least-squares fit of an ellipse to a set of lattice points, and
//! conversion of general conic coefficients into [`Ellipse`] parameters.
//!
//! # Example
//!
//! ```
//! use volsample_core::Point3;
//! use volsample_fit::fit_ellipse;
//!
//! let pts: Vec<Point3> = (0..36)
//!     .map(|i| {
//!         let t = (i as f64 * 10.0).to_radians();
//!         let x = 40.5 + 20.0 * t.cos();
//!         let y = 30.5 + 10.0 * t.sin();
//!         Point3::new(x.round() as i32, y.round() as i32, 2)
//!     })
//!     .collect();
//! let e = fit_ellipse(&pts).unwrap();
//! assert_eq!(e.frame(), 2);
//! assert!((e.major - 20.0).abs() <= 1.0);
//! ```
//!
//! [`Ellipse`]: volsample_core::Ellipse

pub mod conic;
pub mod direct;
mod error;

pub use conic::ConicCoeffs;
pub use direct::{MIN_FIT_POINTS, fit_conic, fit_ellipse};
pub use error::{FitError, FitResult};
