//! Ellipse parameters shared by the fitter and the ellipse rasterizer

use crate::geom::Point3;

/// Ellipse in one frame of the volume.
///
/// `major` and `minor` are semi-axis lengths. `angle` is in degrees and
/// follows the image-axis convention in which a fitted angle is stored as
/// `90 + θ`, θ being the conic rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center; `z` is the frame the ellipse lives in
    pub center: Point3,
    /// Major semi-axis length
    pub major: f64,
    /// Minor semi-axis length
    pub minor: f64,
    /// Rotation in degrees
    pub angle: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    pub const fn new(center: Point3, major: f64, minor: f64, angle: f64) -> Self {
        Self {
            center,
            major,
            minor,
            angle,
        }
    }

    /// Frame index of the ellipse.
    #[inline]
    pub fn frame(&self) -> i32 {
        self.center.z
    }
}
