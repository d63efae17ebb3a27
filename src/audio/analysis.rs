use rayon::prelude::*;
use rustfft::{num_complex::Complex, FftPlanner};

use super::extractor::FeatureExtractor;
use super::features::{FeatureParams, NamedReport};

/// Loudness reported for silent or numerically negligible signal.
pub const DECIBEL_FLOOR: f64 = -80.0;

/// Maximum absolute sample magnitude, clamped to 1.0.
pub fn peak_level(samples: &[f64]) -> f64 {
    max_magnitude(samples).min(1.0)
}

/// Quadratic mean amplitude.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    // Scale by the peak so squares of large out-of-range values cannot overflow
    let peak = max_magnitude(samples);
    if peak == 0.0 {
        return 0.0;
    }
    let mean_square =
        samples.iter().map(|&s| (s / peak) * (s / peak)).sum::<f64>() / samples.len() as f64;
    peak * mean_square.sqrt()
}

/// RMS level on a logarithmic scale, clamped to [-80, 0] dB.
pub fn decibels(samples: &[f64]) -> f64 {
    let level = rms(samples);
    if level <= 0.0 {
        return DECIBEL_FLOOR;
    }
    (20.0 * level.log10()).clamp(DECIBEL_FLOOR, 0.0)
}

/// Fraction of adjacent sample pairs whose signs strictly differ.
///
/// A pair touching an exact zero is never a crossing. Signs are compared
/// directly rather than through the product `s[i] * s[i+1] < 0`, which
/// underflows to `-0.0` for very small opposite-signed magnitudes. Such a
/// pair (e.g. `[1e-200, -1e-200]`) counts as a crossing here even though the
/// literal product test would miss it.
pub fn zero_crossing_rate(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let crossings = samples
        .windows(2)
        .filter(|w| (w[0] < 0.0 && w[1] > 0.0) || (w[0] > 0.0 && w[1] < 0.0))
        .count();

    crossings as f64 / (samples.len() - 1) as f64
}

/// Normalized energy-weighted centroid of the bucketed magnitude spectrum.
///
/// The non-negative half of the DFT (`N/2 + 1` indices) is split into
/// `n_bins` contiguous buckets, magnitudes are summed per bucket, and the
/// weighted mean bucket index is divided by `n_bins - 1`. Low values mean
/// energy sits at low frequency; a DC signal lands in bucket 0.
pub fn spectral_centroid_bin(samples: &[f64], n_bins: usize) -> f64 {
    if samples.is_empty() || n_bins == 0 || samples.iter().all(|&s| s == 0.0) {
        return 0.0;
    }

    let magnitudes = magnitude_spectrum(samples);
    let num_indices = magnitudes.len();

    let mut total_energy = 0.0;
    let mut weighted = 0.0;
    for (k, &mag) in magnitudes.iter().enumerate() {
        let bucket = bucket_index(k, num_indices, n_bins);
        total_energy += mag;
        weighted += bucket as f64 * mag;
    }

    if !total_energy.is_finite() || total_energy <= 0.0 || n_bins == 1 {
        return 0.0;
    }

    let centroid = weighted / total_energy;
    log::trace!(
        "centroid: {} indices into {} buckets, centroid bucket {:.3}",
        num_indices,
        n_bins,
        centroid
    );

    (centroid / (n_bins - 1) as f64).clamp(0.0, 1.0)
}

/// Fraction of samples with magnitude strictly below `threshold`.
///
/// An empty buffer counts as fully silent.
pub fn silence_ratio(samples: &[f64], threshold: f64) -> f64 {
    if samples.is_empty() {
        return 1.0;
    }

    let silent = samples.iter().filter(|s| s.abs() < threshold).count();
    silent as f64 / samples.len() as f64
}

/// Compute reports for independent buffers in parallel, preserving order.
pub fn analyze_batch(
    inputs: &[(String, FeatureExtractor)],
    params: &FeatureParams,
) -> Vec<NamedReport> {
    log::info!(
        "Analyzing {} buffer(s) (bins={}, threshold={})",
        inputs.len(),
        params.centroid_bins,
        params.silence_threshold
    );

    let reports: Vec<NamedReport> = inputs
        .par_iter()
        .map(|(name, extractor)| {
            let features = extractor.report(params);
            log::debug!(
                "{}: {} samples, peak={:.4}, rms={:.4}, {:.2} dB, zcr={:.4}, centroid={:.4}, silence={:.4}",
                name,
                features.samples,
                features.peak,
                features.rms,
                features.decibels,
                features.zero_crossing_rate,
                features.spectral_centroid,
                features.silence_ratio
            );
            NamedReport {
                input: name.clone(),
                features,
            }
        })
        .collect();

    let total_samples: usize = reports.iter().map(|r| r.features.samples).sum();
    log::info!(
        "Analyzed {} buffer(s), {} samples total",
        reports.len(),
        total_samples
    );

    reports
}

fn max_magnitude(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// DFT magnitudes for frequency indices `0..=N/2`, of the peak-normalized signal.
///
/// The centroid is invariant to uniform scaling, and normalizing keeps the
/// butterflies from overflowing on large out-of-range samples.
fn magnitude_spectrum(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let peak = max_magnitude(samples).max(f64::MIN_POSITIVE);
    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s / peak, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer[..=n / 2].iter().map(|c| c.norm()).collect()
}

/// Bucket holding frequency index `k` out of `num_indices`.
///
/// Buckets are `num_indices / n_bins` wide and the last one takes the
/// remainder. With fewer indices than buckets the width would be fractional,
/// so indices are spread proportionally over the full bucket range instead.
fn bucket_index(k: usize, num_indices: usize, n_bins: usize) -> usize {
    let width = num_indices / n_bins;
    if width == 0 {
        (k as u128 * n_bins as u128 / num_indices as u128) as usize
    } else {
        (k / width).min(n_bins - 1)
    }
}
