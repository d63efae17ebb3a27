use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "audiofeat", about = "Scalar feature extraction for audio sample buffers")]
pub struct Cli {
    /// Sample files (plain numbers or a JSON array). Reads stdin when empty or `-`
    pub inputs: Vec<PathBuf>,

    /// Frequency buckets for the spectral centroid
    #[arg(long, default_value_t = 256)]
    pub bins: usize,

    /// Magnitude below which a sample counts as silent
    #[arg(long, default_value_t = 0.01)]
    pub threshold: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Config file (defaults to ./audiofeat.toml or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["audiofeat"]);
        assert!(cli.inputs.is_empty());
        assert_eq!(cli.bins, 256);
        assert_eq!(cli.threshold, 0.01);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::parse_from([
            "audiofeat", "a.txt", "b.json", "--bins", "8", "--threshold", "0.2", "-f", "text",
        ]);
        assert_eq!(cli.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.json")]);
        assert_eq!(cli.bins, 8);
        assert_eq!(cli.threshold, 0.2);
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
