use thiserror::Error;

/// Errors raised while building a sample sequence.
///
/// The feature computations themselves never fail; these only surface when a
/// caller hands over something that is not a usable sample list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("sample {index} is not a number: {token:?}")]
    InvalidToken { index: usize, token: String },

    #[error("invalid JSON sample list: {0}")]
    InvalidJson(String),
}
