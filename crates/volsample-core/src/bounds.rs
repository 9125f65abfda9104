//! Canvas containment and local-region clipping
//!
//! Helpers that relate lattice points to the extent of the volume.

use crate::geom::{Extent3, Point3};

/// True iff any axis of `point` is `< 0` or `>= bound[axis]`.
#[inline]
pub fn out_of_canvas(point: Point3, bound: Extent3) -> bool {
    !bound.contains(point)
}

/// Clip the box `point ± radius` to the volume.
///
/// Returns the inclusive `(min_corner, max_corner)` pair. Each axis is
/// clamped to `>= 0` below and `<= bound - 1` above. For a center outside
/// the volume the result may be inverted (`min > max`) on some axis, which
/// describes an empty box.
pub fn bound_local_region(point: Point3, radius: Extent3, bound: Extent3) -> (Point3, Point3) {
    let mut lo = [0i32; 3];
    let mut hi = [0i32; 3];
    let centre = point.to_array();
    let radius = radius.to_array();
    let bound = bound.to_array();

    for axis in 0..3 {
        let c = centre[axis] as i64;
        let r = radius[axis] as i64;
        let b = bound[axis] as i64;
        lo[axis] = clamp_i32((c - r).max(0));
        hi[axis] = clamp_i32(if c + r >= b { b - 1 } else { c + r });
    }

    (Point3::from_array(lo), Point3::from_array(hi))
}

/// True iff the two points differ by less than 2 on every axis.
#[inline]
pub fn points_continuous(p1: Point3, p2: Point3) -> bool {
    p1.is_continuous_with(p2)
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_canvas() {
        let bound = Extent3::new(100, 100, 10);
        assert!(!out_of_canvas(Point3::new(0, 0, 0), bound));
        assert!(!out_of_canvas(Point3::new(99, 99, 9), bound));
        assert!(out_of_canvas(Point3::new(100, 50, 5), bound));
        assert!(out_of_canvas(Point3::new(50, -1, 5), bound));
        assert!(out_of_canvas(Point3::new(50, 50, 10), bound));
    }

    #[test]
    fn test_bound_local_region_interior() {
        let (lo, hi) = bound_local_region(
            Point3::new(50, 50, 5),
            Extent3::new(3, 2, 0),
            Extent3::new(100, 100, 10),
        );
        assert_eq!(lo, Point3::new(47, 48, 5));
        assert_eq!(hi, Point3::new(53, 52, 5));
    }

    #[test]
    fn test_bound_local_region_clipped() {
        let (lo, hi) = bound_local_region(
            Point3::new(1, 98, 0),
            Extent3::new(5, 5, 2),
            Extent3::new(100, 100, 3),
        );
        assert_eq!(lo, Point3::new(0, 93, 0));
        assert_eq!(hi, Point3::new(6, 99, 2));
    }

    #[test]
    fn test_bound_local_region_outside_is_empty() {
        let (lo, hi) = bound_local_region(
            Point3::new(150, 10, 0),
            Extent3::new(0, 0, 0),
            Extent3::new(100, 100, 1),
        );
        assert!(lo.x > hi.x);
    }

    #[test]
    fn test_points_continuous() {
        assert!(points_continuous(Point3::new(0, 0, 0), Point3::new(1, 1, 1)));
        assert!(!points_continuous(Point3::new(0, 0, 0), Point3::new(0, 2, 0)));
    }
}
