use serde::{Deserialize, Serialize};

/// Default number of frequency buckets for the spectral centroid.
pub const DEFAULT_CENTROID_BINS: usize = 256;
/// Default magnitude below which a sample counts as silent.
pub const DEFAULT_SILENCE_THRESHOLD: f64 = 0.01;

/// Tunable parameters for the two parameterized features.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureParams {
    /// Bucket count for `spectral_centroid_bin`
    pub centroid_bins: usize,
    /// Strict upper bound on |sample| for `silence_ratio`
    pub silence_threshold: f64,
}

impl Default for FeatureParams {
    fn default() -> Self {
        Self {
            centroid_bins: DEFAULT_CENTROID_BINS,
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
        }
    }
}

/// All scalar descriptors of one sample buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Number of samples analyzed
    pub samples: usize,
    /// Peak magnitude, clamped to 1.0
    pub peak: f64,
    /// Root-mean-square level (linear)
    pub rms: f64,
    /// RMS level in dB, floored at -80
    pub decibels: f64,
    /// Fraction of adjacent pairs that change sign (0.0-1.0)
    pub zero_crossing_rate: f64,
    /// Normalized spectral centroid bucket (0.0-1.0)
    pub spectral_centroid: f64,
    /// Fraction of samples below the silence threshold (0.0-1.0)
    pub silence_ratio: f64,
    /// Bucket count the centroid was computed with
    pub centroid_bins: usize,
    /// Threshold the silence ratio was computed with
    pub silence_threshold: f64,
}

/// A report tagged with the input it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedReport {
    pub input: String,
    pub features: FeatureReport,
}
