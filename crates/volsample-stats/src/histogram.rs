//! Color histogram comparison
//!
//! Each point set is summarized by a per-channel histogram of 32 bins of
//! width 8 over the exact pixel colors. Bin counts are smoothed with a
//! small Dirichlet prior before being turned into probabilities, and two
//! sets are compared by the symmetric Kullback-Leibler divergence (base 2)
//! of each channel, combined as a root mean square.

use crate::error::{StatsError, StatsResult};
use crate::region::{DEFAULT_COLOR_RADIUS, local_color};
use log::debug;
use volsample_core::{CHANNELS, ColorVolume, Point3};

/// Number of bins per channel.
pub const HISTOGRAM_BINS: usize = 32;
/// Channel values covered by one bin.
pub const BIN_WIDTH: usize = 256 / HISTOGRAM_BINS;
/// Pseudo-count added to every bin.
pub const DIRICHLET_PRIOR: f64 = 1e-4;

/// Per-channel binned color counts of a point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: [[u32; HISTOGRAM_BINS]; CHANNELS],
    total: u32,
}

impl ColorHistogram {
    /// Bin the exact colors of `points`.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyPointSet`] if `points` is empty
    /// - [`StatsError::EmptyRegion`] if a point lies outside the volume
    pub fn from_points<V>(volume: &V, points: &[Point3]) -> StatsResult<Self>
    where
        V: ColorVolume + ?Sized,
    {
        if points.is_empty() {
            return Err(StatsError::EmptyPointSet("histogram input"));
        }

        let mut counts = [[0u32; HISTOGRAM_BINS]; CHANNELS];
        for &p in points {
            let color = local_color(volume, p, DEFAULT_COLOR_RADIUS)?;
            for (channel, value) in counts.iter_mut().zip(color) {
                let bin = (value as usize / BIN_WIDTH).min(HISTOGRAM_BINS - 1);
                channel[bin] += 1;
            }
        }

        Ok(Self {
            counts,
            total: points.len() as u32,
        })
    }

    /// Raw bin counts of `channel`.
    pub fn counts(&self, channel: usize) -> Option<&[u32; HISTOGRAM_BINS]> {
        self.counts.get(channel)
    }

    /// Number of binned points.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Smoothed probabilities of `channel`:
    /// `(count + prior) / (total + bins * prior)`.
    pub fn probabilities(&self, channel: usize) -> [f64; HISTOGRAM_BINS] {
        let mut probs = [0.0; HISTOGRAM_BINS];
        let Some(counts) = self.counts.get(channel) else {
            return probs;
        };
        let denom = self.total as f64 + HISTOGRAM_BINS as f64 * DIRICHLET_PRIOR;
        for (p, &c) in probs.iter_mut().zip(counts) {
            *p = (c as f64 + DIRICHLET_PRIOR) / denom;
        }
        probs
    }

    /// Symmetric KL divergence to `other`, per channel.
    pub fn symmetric_kl(&self, other: &ColorHistogram) -> [f64; CHANNELS] {
        let mut kls = [0.0; CHANNELS];
        for (ch, kl) in kls.iter_mut().enumerate() {
            let p1 = self.probabilities(ch);
            let p2 = other.probabilities(ch);
            let mut d12 = 0.0;
            let mut d21 = 0.0;
            for (&a, &b) in p1.iter().zip(&p2) {
                d12 += a * (a / b).log2();
                d21 += b * (b / a).log2();
            }
            *kl = (d12 + d21) / 2.0;
        }
        kls
    }

    /// Root mean square of the per-channel symmetric KL divergences.
    pub fn divergence(&self, other: &ColorHistogram) -> f64 {
        let kls = self.symmetric_kl(other);
        debug!("histogram divergence per channel: {:?}", kls);
        (kls.iter().map(|k| k * k).sum::<f64>() / CHANNELS as f64).sqrt()
    }
}

/// Color dissimilarity of two point sets.
///
/// Symmetric in its arguments, and 0 for a set compared with itself.
///
/// # Errors
///
/// Fails if either set is empty or holds a point outside the volume.
pub fn compare_histograms<V>(
    volume: &V,
    points_1: &[Point3],
    points_2: &[Point3],
) -> StatsResult<f64>
where
    V: ColorVolume + ?Sized,
{
    let h1 = ColorHistogram::from_points(volume, points_1)?;
    let h2 = ColorHistogram::from_points(volume, points_2)?;
    Ok(h1.divergence(&h2))
}
