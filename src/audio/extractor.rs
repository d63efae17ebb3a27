use crate::error::FeatureError;

use super::analysis;
use super::features::{FeatureParams, FeatureReport};

/// Owns one validated sample buffer and exposes the scalar descriptors over it.
///
/// Every query is a pure function of the stored samples; nothing is cached,
/// so calls may come in any order, any number of times, from any thread.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureExtractor {
    samples: Vec<f64>,
}

impl FeatureExtractor {
    /// Take ownership of `samples`, rejecting NaN and infinite values.
    ///
    /// Finite values outside [-1.0, 1.0] are accepted.
    pub fn new(samples: Vec<f64>) -> Result<Self, FeatureError> {
        check_finite(&samples)?;
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Peak magnitude, clamped to 1.0 (0.0 when empty).
    pub fn normalize(&self) -> f64 {
        analysis::peak_level(&self.samples)
    }

    pub fn compute_rms(&self) -> f64 {
        analysis::rms(&self.samples)
    }

    /// RMS level in dB, within [-80, 0].
    pub fn compute_decibels(&self) -> f64 {
        analysis::decibels(&self.samples)
    }

    pub fn zero_crossing_rate(&self) -> f64 {
        analysis::zero_crossing_rate(&self.samples)
    }

    /// Normalized centroid over `n_bins` frequency buckets (0.0-1.0).
    pub fn spectral_centroid_bin(&self, n_bins: usize) -> f64 {
        analysis::spectral_centroid_bin(&self.samples, n_bins)
    }

    pub fn silence_ratio(&self, threshold: f64) -> f64 {
        analysis::silence_ratio(&self.samples, threshold)
    }

    /// All six descriptors at once.
    pub fn report(&self, params: &FeatureParams) -> FeatureReport {
        FeatureReport {
            samples: self.samples.len(),
            peak: self.normalize(),
            rms: self.compute_rms(),
            decibels: self.compute_decibels(),
            zero_crossing_rate: self.zero_crossing_rate(),
            spectral_centroid: self.spectral_centroid_bin(params.centroid_bins),
            silence_ratio: self.silence_ratio(params.silence_threshold),
            centroid_bins: params.centroid_bins,
            silence_threshold: params.silence_threshold,
        }
    }
}

pub(crate) fn check_finite(samples: &[f64]) -> Result<(), FeatureError> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(FeatureError::NonFiniteSample {
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}
