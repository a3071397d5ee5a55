//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigBuilder, ConfigFile, OscillationConfig};
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "oscdetect")]
#[command(about = "Detect periodic amplitude modulations per frequency band of a spectrogram")]
pub struct Args {
    /// Spectrogram as a JSON array of frame rows (each row one value per bin)
    #[arg(short, long, required_unless_present = "demo", conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Analyze a built-in synthetic spectrogram instead of a file
    #[arg(long)]
    pub demo: bool,

    /// JSON configuration document; individual flags override it
    #[arg(short, long, env = "OSCDETECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum share of spectral power at the peak, in (0, 1]
    #[arg(short, long)]
    pub sensitivity: Option<f64>,

    /// Frames per autocorrelation window (even)
    #[arg(short = 'l', long)]
    pub sample_length: Option<usize>,

    /// Pattern extraction algorithm (direct, svd-filtered)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Spectrogram frame rate, used to report oscillation rates in Hz
    #[arg(long)]
    pub frames_per_second: Option<f64>,

    /// Print the full analysis as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve flags on top of an optional config document
    pub fn resolve_config(&self, file: Option<ConfigFile>) -> Result<OscillationConfig> {
        let base = match file {
            Some(file) => file.into_config()?,
            None => OscillationConfig::default(),
        };

        let mut builder = ConfigBuilder::new()
            .sensitivity(self.sensitivity.unwrap_or(base.sensitivity))
            .sample_length(self.sample_length.unwrap_or(base.sample_length))
            .algorithm(base.algorithm);
        if let Some(name) = self.algorithm.as_deref() {
            builder = builder.algorithm_name(name)?;
        }
        builder.build()
    }
}
