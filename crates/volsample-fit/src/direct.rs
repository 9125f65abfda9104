//! Direct least-squares ellipse fit
//!
//! Fitzgibbon, Pilu and Fisher, "Direct Least Square Fitting of Ellipses"
//! (1999), in the numerically stable block form of Halir and Flusser.
//! Every point contributes the monomial row `(x², xy, y², x, y, 1)` to the
//! scatter matrix `S`. The linear coefficients are eliminated through the
//! `S22` block, leaving a 3x3 eigenproblem on the quadratic coefficients
//! under the constraint `4AC − B² > 0`.
//!
//! Coordinates are shifted to the centroid and scaled to a mean distance of
//! √2 before the scatter matrix is built, and the coefficients are mapped
//! back afterwards.

use crate::conic::ConicCoeffs;
use crate::error::{FitError, FitResult};
use log::debug;
use nalgebra::{Matrix3, Matrix6, Vector3, Vector6};
use volsample_core::{Ellipse, Point3};

/// Minimum number of points accepted by the fitter.
pub const MIN_FIT_POINTS: usize = 5;

/// Relative determinant below which the linear scatter block is singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Centroid and isotropic scale of a point set.
#[derive(Debug, Clone, Copy)]
struct Normalization {
    mean_x: f64,
    mean_y: f64,
    scale: f64,
}

impl Normalization {
    fn from_points(points: &[[f64; 2]]) -> FitResult<Self> {
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;
        let mean_dist = points
            .iter()
            .map(|p| (p[0] - mean_x).hypot(p[1] - mean_y))
            .sum::<f64>()
            / n;

        if !mean_dist.is_finite() {
            return Err(FitError::NonFinite("point coordinates"));
        }
        if mean_dist <= f64::EPSILON {
            return Err(FitError::SingularScatter);
        }

        Ok(Self {
            mean_x,
            mean_y,
            scale: std::f64::consts::SQRT_2 / mean_dist,
        })
    }

    fn apply(&self, p: [f64; 2]) -> (f64, f64) {
        (
            (p[0] - self.mean_x) * self.scale,
            (p[1] - self.mean_y) * self.scale,
        )
    }

    /// Map a conic in normalized coordinates `x' = s(x − mx)`,
    /// `y' = s(y − my)` back to pixel coordinates.
    fn denormalize(&self, c: &Vector6<f64>) -> ConicCoeffs {
        let (mx, my, s) = (self.mean_x, self.mean_y, self.scale);
        let [a_, b_, c_, d_, e_, f_] = [c[0], c[1], c[2], c[3], c[4], c[5]];
        let s2 = s * s;

        ConicCoeffs([
            a_ * s2,
            b_ * s2,
            c_ * s2,
            -2.0 * a_ * s2 * mx - b_ * s2 * my + d_ * s,
            -b_ * s2 * mx - 2.0 * c_ * s2 * my + e_ * s,
            a_ * s2 * mx * mx + b_ * s2 * mx * my + c_ * s2 * my * my - d_ * s * mx - e_ * s * my
                + f_,
        ])
    }
}

/// Fit a general conic to `points` by the direct method.
///
/// # Errors
///
/// - [`FitError::TooFewPoints`] for fewer than [`MIN_FIT_POINTS`] points
/// - [`FitError::SingularScatter`] for coincident or collinear points
/// - [`FitError::NonFinite`] for NaN or infinite coordinates, or when no
///   eigenvector satisfies the ellipse constraint
pub fn fit_conic(points: &[[f64; 2]]) -> FitResult<ConicCoeffs> {
    if points.len() < MIN_FIT_POINTS {
        return Err(FitError::TooFewPoints {
            needed: MIN_FIT_POINTS,
            got: points.len(),
        });
    }

    let norm = Normalization::from_points(points)?;

    let mut scatter = Matrix6::<f64>::zeros();
    for &p in points {
        let (x, y) = norm.apply(p);
        let row = Vector6::new(x * x, x * y, y * y, x, y, 1.0);
        scatter += row * row.transpose();
    }

    // Quadratic and linear blocks of the scatter matrix:
    //   S = [S11 S12]
    //       [S21 S22]
    let s11 = scatter.fixed_view::<3, 3>(0, 0).into_owned();
    let s12 = scatter.fixed_view::<3, 3>(0, 3).into_owned();
    let s22 = scatter.fixed_view::<3, 3>(3, 3).into_owned();

    // Collinear points leave S22 rank deficient
    if s22.determinant().abs() <= SINGULAR_TOLERANCE * s22.norm().powi(3) {
        return Err(FitError::SingularScatter);
    }
    let s22_inv = s22.try_inverse().ok_or(FitError::SingularScatter)?;
    let reduced = s11 - s12 * s22_inv * s12.transpose();

    // Inverse of the constraint block [[0, 0, 2], [0, -1, 0], [2, 0, 0]]
    let constraint_inv = Matrix3::new(0.0, 0.0, 0.5, 0.0, -1.0, 0.0, 0.5, 0.0, 0.0);
    let system = constraint_inv * reduced;
    if system.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite("scatter matrix"));
    }

    let (lambda, quadratic) = ellipse_eigenvector(&system)?;
    let linear = -(s22_inv * s12.transpose() * quadratic);

    let coeffs = Vector6::new(
        quadratic[0],
        quadratic[1],
        quadratic[2],
        linear[0],
        linear[1],
        linear[2],
    );
    let conic = norm.denormalize(&coeffs);
    if conic.0.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite("conic coefficients"));
    }

    debug!(
        "direct fit of {} points: eigenvalue {:.6e}, conic {:?}",
        points.len(),
        lambda,
        conic.0
    );
    Ok(conic)
}

/// Real eigenpair of `system` whose eigenvector `(a, b, c)` satisfies
/// `4ac − b² > 0`. If more than one does, the smallest eigenvalue in
/// magnitude wins.
fn ellipse_eigenvector(system: &Matrix3<f64>) -> FitResult<(f64, Vector3<f64>)> {
    let mut best: Option<(f64, Vector3<f64>)> = None;

    for ev in system.complex_eigenvalues().iter() {
        if ev.im.abs() > 1e-9 * (1.0 + ev.re.abs()) {
            continue;
        }
        let lambda = ev.re;

        // Null vector of (system - λI): right singular vector of the
        // smallest singular value
        let svd = (system - Matrix3::identity() * lambda).svd(false, true);
        let Some(v_t) = svd.v_t else {
            continue;
        };
        let v: Vector3<f64> = v_t.row(svd.singular_values.imin()).transpose();

        if 4.0 * v[0] * v[2] - v[1] * v[1] <= 0.0 {
            continue;
        }
        if best.is_none_or(|(l, _)| lambda.abs() < l.abs()) {
            best = Some((lambda, v));
        }
    }

    best.ok_or(FitError::NonFinite("ellipse eigenvector"))
}

/// Fit an ellipse to lattice points.
///
/// Only `x` and `y` are used. The result lies in the frame of the first
/// point; see [`ConicCoeffs::to_ellipse`] for how the parameters are
/// rounded.
///
/// # Errors
///
/// Fails as [`fit_conic`] and [`ConicCoeffs::to_ellipse`] do.
pub fn fit_ellipse(points: &[Point3]) -> FitResult<Ellipse> {
    let Some(first) = points.first() else {
        return Err(FitError::TooFewPoints {
            needed: MIN_FIT_POINTS,
            got: 0,
        });
    };
    let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.x as f64, p.y as f64]).collect();
    let conic = fit_conic(&coords)?;
    conic.to_ellipse(first.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(cx: f64, cy: f64, sx: f64, sy: f64, rot: f64, n: usize) -> Vec<[f64; 2]> {
        let (sr, cr) = rot.sin_cos();
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                let (x, y) = (sx * t.cos(), sy * t.sin());
                [cx + x * cr - y * sr, cy + x * sr + y * cr]
            })
            .collect()
    }

    #[test]
    fn test_fit_recovers_axis_aligned() {
        let pts = sample(40.3, 60.7, 12.0, 25.0, 0.0, 36);
        let conic = fit_conic(&pts).unwrap();
        assert!(conic.is_ellipse());
        for p in &pts {
            let r = conic.algebraic_distance(p[0], p[1]) / conic.0[5].abs().max(1e-12);
            assert!(r.abs() < 1e-6);
        }
        let e = conic.to_ellipse(0).unwrap();
        assert_eq!(e.center, Point3::new(40, 60, 0));
        assert_eq!((e.major, e.minor), (25.0, 12.0));
        assert_eq!(e.angle, 90.0);
    }

    #[test]
    fn test_fit_rotated() {
        let pts = sample(30.5, 30.5, 20.0, 8.0, 30f64.to_radians(), 40);
        let e = fit_conic(&pts).unwrap().to_ellipse(0).unwrap();
        assert_eq!((e.major, e.minor), (20.0, 8.0));
        assert_eq!(e.center, Point3::new(30, 30, 0));
        // Conic rotation θ is 120° here, reported as 90 + θ
        assert!((e.angle - 30.0).abs() <= 1.0 || (e.angle - 210.0).abs() <= 1.0);
    }

    #[test]
    fn test_fit_errors() {
        let few = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        assert_eq!(
            fit_conic(&few),
            Err(FitError::TooFewPoints { needed: 5, got: 4 })
        );

        let same = [[3.0, 3.0]; 8];
        assert_eq!(fit_conic(&same), Err(FitError::SingularScatter));

        let nan = [[f64::NAN, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 2.0]];
        assert!(matches!(fit_conic(&nan), Err(FitError::NonFinite(_))));

        assert!(matches!(fit_ellipse(&[]), Err(FitError::TooFewPoints { got: 0, .. })));
    }

    #[test]
    fn test_fit_ellipse_keeps_frame() {
        let pts: Vec<Point3> = sample(50.5, 50.5, 10.0, 20.0, 0.0, 24)
            .into_iter()
            .map(|[x, y]| Point3::new(x.round() as i32, y.round() as i32, 7))
            .collect();
        let e = fit_ellipse(&pts).unwrap();
        assert_eq!(e.frame(), 7);
        assert!((e.major - 20.0).abs() <= 1.0);
        assert!((e.minor - 10.0).abs() <= 1.0);
    }
}
