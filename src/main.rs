mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;

use audiofeat::audio::analysis::analyze_batch;
use audiofeat::{parse_samples, FeatureExtractor, FeatureParams, NamedReport};
use cli::{Cli, OutputFormat};

const STDIN_NAME: &str = "-";
const LOAD_PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs loaded ({eta} remaining)";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    if let Some(path) = config::resolve_config_path(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(&path) {
            log::info!("Loaded config from {}", path.display());
            // Merge: config values apply only when CLI is at its default
            if cli.bins == 256 { cli.bins = cfg.features.centroid_bins; }
            if cli.threshold == 0.01 { cli.threshold = cfg.features.silence_threshold; }
            if cli.format == OutputFormat::Json { cli.format = cfg.output.format; }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    if !cli.threshold.is_finite() || cli.threshold < 0.0 {
        anyhow::bail!("Silence threshold must be a finite value >= 0, got {}", cli.threshold);
    }
    if cli.bins == 0 {
        log::warn!("--bins 0 disables the spectral centroid (always 0.0)");
    }

    let params = FeatureParams {
        centroid_bins: cli.bins,
        silence_threshold: cli.threshold,
    };

    let names: Vec<String> = if cli.inputs.is_empty() {
        vec![STDIN_NAME.to_string()]
    } else {
        cli.inputs.iter().map(|p| p.display().to_string()).collect()
    };

    let pb = if names.len() > 1 {
        let pb = ProgressBar::new(names.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(LOAD_PROGRESS_TEMPLATE)?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut inputs: Vec<(String, FeatureExtractor)> = Vec::with_capacity(names.len());
    for name in names {
        let text = read_input(&name)?;
        let samples =
            parse_samples(&text).with_context(|| format!("Invalid samples in {}", name))?;
        let extractor = FeatureExtractor::new(samples)
            .with_context(|| format!("Invalid samples in {}", name))?;
        log::info!("Loaded {}: {} samples", name, extractor.len());
        inputs.push((name, extractor));
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let reports = analyze_batch(&inputs, &params);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => print!("{}", format_table(&reports)),
    }

    Ok(())
}

fn read_input(name: &str) -> Result<String> {
    if name == STDIN_NAME {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read samples from stdin")?;
        return Ok(text);
    }

    let path = Path::new(name);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file: {}", path.display()))
}

fn format_table(reports: &[NamedReport]) -> String {
    let width = reports
        .iter()
        .map(|r| r.input.len())
        .chain(std::iter::once("input".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:<width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>6}  {:>8}  {:>7}\n",
        "input", "samples", "peak", "rms", "dB", "zcr", "centroid", "silence",
        width = width
    );
    for r in reports {
        let f = &r.features;
        out.push_str(&format!(
            "{:<width$}  {:>8}  {:>8.4}  {:>8.4}  {:>8.2}  {:>6.4}  {:>8.4}  {:>7.4}\n",
            r.input,
            f.samples,
            f.peak,
            f.rms,
            f.decibels,
            f.zero_crossing_rate,
            f.spectral_centroid,
            f.silence_ratio,
            width = width
        ));
    }
    out
}
