use serde::Deserialize;
use std::path::{Path, PathBuf};

use audiofeat::{DEFAULT_CENTROID_BINS, DEFAULT_SILENCE_THRESHOLD};

use crate::cli::OutputFormat;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub features: FeaturesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FeaturesConfig {
    #[serde(default = "default_centroid_bins")]
    pub centroid_bins: usize,
    #[serde(default = "default_silence_threshold")]
    pub silence_threshold: f64,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            centroid_bins: default_centroid_bins(),
            silence_threshold: default_silence_threshold(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_centroid_bins() -> usize { DEFAULT_CENTROID_BINS }
fn default_silence_threshold() -> f64 { DEFAULT_SILENCE_THRESHOLD }
fn default_format() -> OutputFormat { OutputFormat::Json }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Explicit path, or the first of ./audiofeat.toml, ~/.config/audiofeat/config.toml
/// and the platform config dir that exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from("audiofeat.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("audiofeat").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("audiofeat").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}
