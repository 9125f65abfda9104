//! Volume access and bounds regression test
//!
//! Frame sequence construction, color lookup at the volume edges, and
//! local-region clipping.

use image::RgbImage;
use volsample_core::{
    ColorVolume, Error, Extent3, FrameSequence, Point3, bound_local_region, out_of_canvas,
    points_continuous,
};
use volsample_test::{RegParams, checkerboard_frames, uniform_frames};

// ========================================================================
// Test: Frame sequence
// ========================================================================

#[test]
fn volume_reg_lookup() {
    let mut rp = RegParams::new("volume_lookup");

    let frames = checkerboard_frames(16, 8, 3, 4, [0, 0, 0], [255, 128, 64]);
    let seq = FrameSequence::new(&frames).unwrap();

    rp.compare_values(1.0, if seq.extent() == Extent3::new(16, 8, 3) { 1.0 } else { 0.0 }, 0.0);

    // Cells alternate along every axis, including the frame axis
    let c0 = seq.color_at(Point3::new(0, 0, 0)).unwrap();
    let c1 = seq.color_at(Point3::new(0, 0, 1)).unwrap();
    let c2 = seq.color_at(Point3::new(4, 0, 0)).unwrap();
    rp.compare_values(0.0, c0[0] as f64, 0.0);
    rp.compare_values(255.0, c1[0] as f64, 0.0);
    rp.compare_values(64.0, c2[2] as f64, 0.0);

    // Last addressable corner and one step past it
    let corner = seq.color(Point3::new(15, 7, 2));
    rp.compare_values(1.0, if corner.is_some() { 1.0 } else { 0.0 }, 0.0);
    for p in [
        Point3::new(16, 7, 2),
        Point3::new(15, 8, 2),
        Point3::new(15, 7, 3),
        Point3::new(-1, 0, 0),
    ] {
        rp.compare_values(1.0, if seq.color(p).is_none() { 1.0 } else { 0.0 }, 0.0);
        let err = matches!(seq.color_at(p), Err(Error::OutOfVolume { .. }));
        rp.compare_values(1.0, if err { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "volume_lookup regression test failed");
}

#[test]
fn volume_reg_construction_errors() {
    let mut rp = RegParams::new("volume_errors");

    let empty: Vec<RgbImage> = Vec::new();
    let r = FrameSequence::new(&empty);
    rp.compare_values(1.0, if matches!(r, Err(Error::EmptyInput(_))) { 1.0 } else { 0.0 }, 0.0);

    let mut mixed = uniform_frames(10, 10, 2, [1, 2, 3]);
    mixed.push(RgbImage::new(10, 11));
    let r = FrameSequence::new(&mixed);
    let incompatible = matches!(r, Err(Error::IncompatibleSizes(10, 10, 10, 11)));
    rp.compare_values(1.0, if incompatible { 1.0 } else { 0.0 }, 0.0);

    let zero = vec![RgbImage::new(0, 5)];
    let r = FrameSequence::new(&zero);
    let rejected = matches!(r, Err(Error::InvalidParameter(_)));
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "volume_errors regression test failed");
}

// ========================================================================
// Test: Bounds
// ========================================================================

#[test]
fn volume_reg_bounds() {
    let mut rp = RegParams::new("volume_bounds");

    let bound = Extent3::new(20, 10, 4);

    let (lo, hi) = bound_local_region(Point3::new(1, 8, 2), Extent3::new(3, 3, 1), bound);
    rp.compare_points(&[Point3::new(0, 5, 1), Point3::new(4, 9, 3)], &[lo, hi]);

    // Zero radius collapses onto the center
    let (lo, hi) = bound_local_region(Point3::new(7, 7, 0), Extent3::new(0, 0, 0), bound);
    rp.compare_points(&[Point3::new(7, 7, 0), Point3::new(7, 7, 0)], &[lo, hi]);

    let last_frame = out_of_canvas(Point3::new(19, 9, 3), bound);
    let past_last = out_of_canvas(Point3::new(19, 9, 4), bound);
    rp.compare_values(0.0, if last_frame { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if past_last { 1.0 } else { 0.0 }, 0.0);

    let a = Point3::new(5, 5, 5);
    rp.compare_values(1.0, if points_continuous(a, Point3::new(6, 4, 5)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if points_continuous(a, Point3::new(7, 5, 5)) { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "volume_bounds regression test failed");
}
