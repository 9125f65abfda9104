//! Color volume access
//!
//! A color volume is a time-ordered sequence of equally sized 3-channel
//! frames, addressed as `(column, row, frame)`. Sampling code only reads
//! from it, through the [`ColorVolume`] trait, so callers may plug in
//! their own frame storage.
//!
//! [`FrameSequence`] is the bundled provider over borrowed
//! [`image::RgbImage`] frames.

use crate::error::{Error, Result};
use crate::geom::{Extent3, Point3};
use image::RgbImage;

/// Read-only 3-channel color lookup over a frame sequence.
///
/// Implementations must be consistent: `color(p)` returns `Some` exactly
/// when `extent().contains(p)`.
pub trait ColorVolume {
    /// Exclusive upper bound `(width, height, frame count)`.
    fn extent(&self) -> Extent3;

    /// Color of the pixel at `point`, or `None` outside the volume.
    fn color(&self, point: Point3) -> Option<[u8; 3]>;

    /// Color of the pixel at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfVolume`] if `point` is outside the volume.
    fn color_at(&self, point: Point3) -> Result<[u8; 3]> {
        self.color(point).ok_or(Error::OutOfVolume {
            x: point.x,
            y: point.y,
            z: point.z,
        })
    }
}

impl<V: ColorVolume + ?Sized> ColorVolume for &V {
    fn extent(&self) -> Extent3 {
        (**self).extent()
    }

    fn color(&self, point: Point3) -> Option<[u8; 3]> {
        (**self).color(point)
    }
}

/// Borrowed sequence of RGB frames.
///
/// The first frame fixes width and height for the whole sequence.
#[derive(Debug, Clone, Copy)]
pub struct FrameSequence<'a> {
    frames: &'a [RgbImage],
    width: u32,
    height: u32,
}

impl<'a> FrameSequence<'a> {
    /// Wrap a slice of frames.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `frames` is empty
    /// - [`Error::InvalidParameter`] if the frames have zero area
    /// - [`Error::IncompatibleSizes`] if any frame differs in size from
    ///   the first
    pub fn new(frames: &'a [RgbImage]) -> Result<Self> {
        let first = frames.first().ok_or(Error::EmptyInput("frame sequence"))?;
        let (width, height) = first.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "frame size must be non-zero, got {width}x{height}"
            )));
        }
        if let Some(other) = frames.iter().find(|f| f.dimensions() != (width, height)) {
            let (w, h) = other.dimensions();
            return Err(Error::IncompatibleSizes(width, height, w, h));
        }
        Ok(Self {
            frames,
            width,
            height,
        })
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; construction rejects empty sequences.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get a frame by index.
    pub fn frame(&self, index: usize) -> Option<&'a RgbImage> {
        self.frames.get(index)
    }
}

impl ColorVolume for FrameSequence<'_> {
    fn extent(&self) -> Extent3 {
        let depth = u32::try_from(self.frames.len()).unwrap_or(u32::MAX);
        Extent3::new(self.width, self.height, depth)
    }

    fn color(&self, point: Point3) -> Option<[u8; 3]> {
        if !self.extent().contains(point) {
            return None;
        }
        self.frames
            .get(point.z as usize)?
            .get_pixel_checked(point.x as u32, point.y as u32)
            .map(|px| px.0)
    }
}
