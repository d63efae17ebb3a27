//! Scalar feature extraction over in-memory audio sample buffers.
//!
//! Peak level, RMS, decibels, zero-crossing rate, a bucketed spectral
//! centroid and silence ratio, each defined for every buffer including the
//! empty one.

pub mod audio;
pub mod error;

pub use audio::analysis::DECIBEL_FLOOR;
pub use audio::extractor::FeatureExtractor;
pub use audio::features::{
    FeatureParams, FeatureReport, NamedReport, DEFAULT_CENTROID_BINS, DEFAULT_SILENCE_THRESHOLD,
};
pub use audio::samples::parse_samples;
pub use error::FeatureError;
