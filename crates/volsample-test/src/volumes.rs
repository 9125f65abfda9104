//! Synthetic frame sequences
//!
//! Every builder returns owned frames; wrap them with [`frame_sequence`]
//! to sample them.

use crate::error::TestResult;
use image::{Rgb, RgbImage};
use volsample_core::FrameSequence;

/// `depth` frames of a single color.
pub fn uniform_frames(width: u32, height: u32, depth: u32, color: [u8; 3]) -> Vec<RgbImage> {
    (0..depth)
        .map(|_| RgbImage::from_pixel(width, height, Rgb(color)))
        .collect()
}

/// Frames split at column `edge_x`: `left` for `x < edge_x`, `right`
/// otherwise.
pub fn vertical_edge_frames(
    width: u32,
    height: u32,
    depth: u32,
    edge_x: u32,
    left: [u8; 3],
    right: [u8; 3],
) -> Vec<RgbImage> {
    (0..depth)
        .map(|_| {
            RgbImage::from_fn(width, height, |x, _| {
                if x < edge_x { Rgb(left) } else { Rgb(right) }
            })
        })
        .collect()
}

/// Checkerboard of `cell`-sized squares alternating `dark` and `light`.
/// The pattern shifts by one cell per frame.
pub fn checkerboard_frames(
    width: u32,
    height: u32,
    depth: u32,
    cell: u32,
    dark: [u8; 3],
    light: [u8; 3],
) -> Vec<RgbImage> {
    let cell = cell.max(1);
    (0..depth)
        .map(|z| {
            RgbImage::from_fn(width, height, |x, y| {
                if (x / cell + y / cell + z) % 2 == 0 {
                    Rgb(dark)
                } else {
                    Rgb(light)
                }
            })
        })
        .collect()
}

/// Horizontal gray ramp: every channel equals `x * step` (saturating).
pub fn ramp_frames(width: u32, height: u32, depth: u32, step: u8) -> Vec<RgbImage> {
    (0..depth)
        .map(|_| {
            RgbImage::from_fn(width, height, |x, _| {
                let v = (x as u64 * step as u64).min(u8::MAX as u64) as u8;
                Rgb([v, v, v])
            })
        })
        .collect()
}

/// Wrap frames as a volume.
pub fn frame_sequence(frames: &[RgbImage]) -> TestResult<FrameSequence<'_>> {
    Ok(FrameSequence::new(frames)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use volsample_core::{ColorVolume, Extent3, Point3};

    #[test]
    fn test_vertical_edge_frames() {
        let frames = vertical_edge_frames(10, 4, 2, 5, [0, 0, 0], [200, 100, 50]);
        let seq = frame_sequence(&frames).unwrap();
        assert_eq!(seq.extent(), Extent3::new(10, 4, 2));
        assert_eq!(seq.color(Point3::new(4, 1, 1)), Some([0, 0, 0]));
        assert_eq!(seq.color(Point3::new(5, 1, 1)), Some([200, 100, 50]));
    }

    #[test]
    fn test_checkerboard_shifts_per_frame() {
        let frames = checkerboard_frames(4, 4, 2, 2, [0, 0, 0], [255, 255, 255]);
        let seq = frame_sequence(&frames).unwrap();
        assert_eq!(seq.color(Point3::new(0, 0, 0)), Some([0, 0, 0]));
        assert_eq!(seq.color(Point3::new(2, 0, 0)), Some([255, 255, 255]));
        assert_eq!(seq.color(Point3::new(0, 0, 1)), Some([255, 255, 255]));
    }

    #[test]
    fn test_ramp_saturates() {
        let frames = ramp_frames(300, 1, 1, 1);
        let seq = frame_sequence(&frames).unwrap();
        assert_eq!(seq.color(Point3::new(7, 0, 0)), Some([7, 7, 7]));
        assert_eq!(seq.color(Point3::new(299, 0, 0)), Some([255, 255, 255]));
    }

    #[test]
    fn test_frame_sequence_empty_is_error() {
        assert!(frame_sequence(&[]).is_err());
    }
}
