//! Threshold sampling regression test
//!
//! Variance and gradient sampling over synthetic volumes.

use volsample_core::{Offset3, Point3};
use volsample_stats::{
    GradientSampling, VarianceSampling, line_by_gradient, line_by_variance, segment_by_gradient,
    segment_by_variance,
};
use volsample_test::{
    RegParams, checkerboard_frames, frame_sequence, uniform_frames, vertical_edge_frames,
};

// ========================================================================
// Test: Variance mode
// ========================================================================

#[test]
fn sampler_reg_variance_constant_region() {
    let mut rp = RegParams::new("sampler_var_const");

    let frames = uniform_frames(60, 40, 4, [90, 120, 30]);
    let seq = frame_sequence(&frames).unwrap();

    for threshold in [0.5, 2.0, 10.0] {
        let opts = VarianceSampling::default().with_threshold(threshold);
        let pts =
            line_by_variance(&seq, Point3::new(30, 20, 1), Offset3::new(2, 1, 1), &opts).unwrap();
        rp.compare_values(0.0, pts.len() as f64, 0.0);
        let pts =
            segment_by_variance(&seq, Point3::new(0, 0, 0), Point3::new(59, 39, 3), &opts)
                .unwrap();
        rp.compare_values(0.0, pts.len() as f64, 0.0);
    }

    // Threshold 0 keeps every point: zero variance still meets it
    let opts = VarianceSampling::default().with_threshold(0.0);
    let pts =
        segment_by_variance(&seq, Point3::new(5, 5, 0), Point3::new(25, 5, 0), &opts).unwrap();
    rp.compare_values(21.0, pts.len() as f64, 0.0);

    assert!(rp.cleanup(), "sampler_var_const regression test failed");
}

#[test]
fn sampler_reg_variance_edge() {
    let mut rp = RegParams::new("sampler_var_edge");

    let frames = vertical_edge_frames(60, 40, 2, 30, [0, 0, 0], [120, 120, 120]);
    let seq = frame_sequence(&frames).unwrap();

    // Default radius (5, 5, 0): points within 5 columns of the edge
    let pts = line_by_variance(
        &seq,
        Point3::new(10, 20, 0),
        Offset3::new(1, 0, 0),
        &VarianceSampling::default(),
    )
    .unwrap();
    rp.compare_values(10.0, pts.len() as f64, 0.0);
    let first = pts.first().map(|p| p.x).unwrap_or(-1);
    let last = pts.last().map(|p| p.x).unwrap_or(-1);
    rp.compare_values(25.0, first as f64, 0.0);
    rp.compare_values(34.0, last as f64, 0.0);

    assert!(rp.cleanup(), "sampler_var_edge regression test failed");
}

// ========================================================================
// Test: Gradient mode
// ========================================================================

#[test]
fn sampler_reg_gradient_markers() {
    let mut rp = RegParams::new("sampler_grad_markers");

    let flat = uniform_frames(50, 50, 3, [10, 10, 10]);
    let seq = frame_sequence(&flat).unwrap();

    let cases = [
        (Point3::new(0, 0, 0), Point3::new(49, 49, 2)),
        (Point3::new(10, 40, 1), Point3::new(11, 40, 1)),
        (Point3::new(-20, 25, 0), Point3::new(25, 25, 0)),
    ];
    for (a, b) in cases {
        let pts = segment_by_gradient(&seq, a, b, &GradientSampling::default()).unwrap();
        rp.compare_values(2.0, pts.len() as f64, 0.0);
    }

    let pts = line_by_gradient(
        &seq,
        Point3::new(25, 25, 1),
        Offset3::new(1, -1, 0),
        &GradientSampling::default(),
    )
    .unwrap();
    rp.compare_values(2.0, pts.len() as f64, 0.0);

    assert!(rp.cleanup(), "sampler_grad_markers regression test failed");
}

#[test]
fn sampler_reg_gradient_checkerboard() {
    let mut rp = RegParams::new("sampler_grad_checker");

    // Cells of 8 pixels: a horizontal walk at row 4 crosses an edge every
    // 8 columns, each one collapsed to a single point
    let frames = checkerboard_frames(64, 16, 1, 8, [0, 0, 0], [200, 200, 200]);
    let seq = frame_sequence(&frames).unwrap();
    let pts = line_by_gradient(
        &seq,
        Point3::new(4, 4, 0),
        Offset3::new(1, 0, 0),
        &GradientSampling::default(),
    )
    .unwrap();

    // 7 interior edges plus the two markers
    rp.compare_values(9.0, pts.len() as f64, 0.0);
    rp.compare_values(1.0, if pts.first() == Some(&Point3::new(0, 4, 0)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if pts.last() == Some(&Point3::new(63, 4, 0)) { 1.0 } else { 0.0 }, 0.0);
    for (i, p) in pts[1..pts.len() - 1].iter().enumerate() {
        rp.compare_values(8.0 * (i as f64 + 1.0), p.x as f64, 0.0);
    }

    assert!(rp.cleanup(), "sampler_grad_checker regression test failed");
}
