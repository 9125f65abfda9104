//! General conic coefficients and their ellipse parameters
//!
//! A conic is stored as `A x² + B xy + C y² + D x + E y + F = 0`.

use crate::error::{FitError, FitResult};
use log::debug;
use std::f64::consts::FRAC_PI_2;
use volsample_core::{Ellipse, Point3};

/// Coefficients `[A, B, C, D, E, F]` of a general conic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicCoeffs(pub [f64; 6]);

impl ConicCoeffs {
    /// True if the conic is an ellipse (`B² − 4AC < 0`).
    pub fn is_ellipse(&self) -> bool {
        let [a, b, c, ..] = self.0;
        b * b - 4.0 * a * c < 0.0
    }

    /// Algebraic residual at `(x, y)`.
    pub fn algebraic_distance(&self, x: f64, y: f64) -> f64 {
        let [a, b, c, d, e, f] = self.0;
        a * x * x + b * x * y + c * y * y + d * x + e * y + f
    }

    /// Same conic with `A + C >= 0`.
    fn with_positive_trace(&self) -> Self {
        if self.0[0] + self.0[2] < 0.0 {
            ConicCoeffs(self.0.map(|v| -v))
        } else {
            *self
        }
    }

    /// Center, semi-axes and rotation of the conic, placed in `frame`.
    ///
    /// The center is truncated to integers and the semi-axes rounded, the
    /// larger one reported as `major`. The angle is `90 + θ` in degrees,
    /// rounded, with θ the rotation of the conic: 0 or 90° for an
    /// axis-aligned conic (depending on which of `A`, `C` is larger),
    /// otherwise `atan(B / (A − C)) / 2`, shifted by 90° when `A <= C`.
    ///
    /// # Errors
    ///
    /// - [`FitError::DegenerateConic`] if `B²/4 − AC == 0`
    /// - [`FitError::NonFinite`] if the conic is not a real ellipse
    pub fn to_ellipse(&self, frame: i32) -> FitResult<Ellipse> {
        let [a, b2, c, d2, e2, g] = self.with_positive_trace().0;
        let b = b2 / 2.0;
        let d = d2 / 2.0;
        let f = e2 / 2.0;

        let num = b * b - a * c;
        if num == 0.0 {
            return Err(FitError::DegenerateConic);
        }

        let x0 = (c * d - b * f) / num;
        let y0 = (a * f - b * d) / num;
        if !x0.is_finite() || !y0.is_finite() {
            return Err(FitError::NonFinite("center"));
        }

        // (c - a) * sqrt(1 + 4b² / (a - c)²) written without the division,
        // so circles (a == c, b == 0) stay finite
        let root = ((a - c) * (a - c) + 4.0 * b * b).sqrt();
        let signed = if a >= c { root } else { -root };
        let up = 2.0 * (a * f * f + c * d * d + g * b * b - 2.0 * b * d * f - a * c * g);
        let down1 = num * (-signed - (c + a));
        let down2 = num * (signed - (c + a));
        let res1 = (up / down1).sqrt();
        let res2 = (up / down2).sqrt();
        if !res1.is_finite() || !res2.is_finite() {
            return Err(FitError::NonFinite("axis length"));
        }

        let theta = if b == 0.0 {
            if a > c { 0.0 } else { FRAC_PI_2 }
        } else if a > c {
            (2.0 * b / (a - c)).atan() / 2.0
        } else {
            FRAC_PI_2 + (2.0 * b / (a - c)).atan() / 2.0
        };
        let angle = 90.0 + theta.to_degrees();

        let (major, minor) = if res1 >= res2 { (res1, res2) } else { (res2, res1) };
        debug!(
            "conic -> center ({:.3}, {:.3}), axes ({:.3}, {:.3}), angle {:.3}",
            x0, y0, major, minor, angle
        );

        Ok(Ellipse::new(
            Point3::new(x0.trunc() as i32, y0.trunc() as i32, frame),
            major.round(),
            minor.round(),
            angle.round(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Conic of an axis-aligned ellipse with semi-axes `sx` (along x) and
    /// `sy` centered at `(cx, cy)`.
    fn axis_aligned(cx: f64, cy: f64, sx: f64, sy: f64) -> ConicCoeffs {
        let a = 1.0 / (sx * sx);
        let c = 1.0 / (sy * sy);
        ConicCoeffs([
            a,
            0.0,
            c,
            -2.0 * a * cx,
            -2.0 * c * cy,
            a * cx * cx + c * cy * cy - 1.0,
        ])
    }

    #[test]
    fn test_axis_aligned_narrow_x() {
        let conic = axis_aligned(50.5, 40.5, 15.0, 30.0);
        assert!(conic.is_ellipse());
        assert!(conic.algebraic_distance(65.5, 40.5).abs() < 1e-12);
        let e = conic.to_ellipse(3).unwrap();
        assert_eq!(e.center, Point3::new(50, 40, 3));
        assert_eq!((e.major, e.minor), (30.0, 15.0));
        assert_eq!(e.angle, 90.0);
    }

    #[test]
    fn test_axis_aligned_wide_x() {
        let e = axis_aligned(20.0, 20.0, 25.0, 10.0).to_ellipse(0).unwrap();
        assert_eq!((e.major, e.minor), (25.0, 10.0));
        assert_eq!(e.angle, 180.0);
    }

    #[test]
    fn test_sign_does_not_matter() {
        let conic = axis_aligned(50.0, 40.0, 15.0, 30.0);
        let flipped = ConicCoeffs(conic.0.map(|v| -v));
        assert_eq!(conic.to_ellipse(0).unwrap(), flipped.to_ellipse(0).unwrap());
    }

    #[test]
    fn test_circle_is_finite() {
        let e = axis_aligned(10.5, 10.5, 5.0, 5.0).to_ellipse(0).unwrap();
        assert_eq!((e.major, e.minor), (5.0, 5.0));
        assert_eq!(e.center, Point3::new(10, 10, 0));
    }

    #[test]
    fn test_degenerate_and_hyperbola() {
        // Parabola y = x²: b² - ac = 0
        let parabola = ConicCoeffs([1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
        assert_eq!(parabola.to_ellipse(0), Err(FitError::DegenerateConic));

        // Hyperbola x² - y² = 1
        let hyperbola = ConicCoeffs([1.0, 0.0, -1.0, 0.0, 0.0, -1.0]);
        assert!(!hyperbola.is_ellipse());
        assert!(matches!(hyperbola.to_ellipse(0), Err(FitError::NonFinite(_))));
    }
}
