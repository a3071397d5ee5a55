// src/config/settings.rs
//
// Engine configuration: thresholds, window length and pattern extraction
// algorithm. Values are immutable once built and passed into the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OscillationError, Result};

/// Default autocorrelation window length in frames
pub const DEFAULT_SAMPLE_LENGTH: usize = 128;

/// Default minimum fraction of spectral power at the peak
pub const DEFAULT_SENSITIVITY: f64 = 0.3;

/// How candidate periodic patterns are drawn from the windowed autocorrelations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionAlgorithm {
    /// Every window's autocorrelation is a candidate
    Direct,
    /// Left singular vectors carrying 90% of the autocorrelation energy
    SvdFiltered,
}

impl DetectionAlgorithm {
    pub fn all() -> Vec<Self> {
        vec![Self::Direct, Self::SvdFiltered]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DetectionAlgorithm::Direct => "direct",
            DetectionAlgorithm::SvdFiltered => "svd-filtered",
        }
    }

    /// Whether accumulated oscillation power is averaged over the window count.
    ///
    /// Only the direct variant does this; SVD output keeps absolute sums.
    pub fn normalizes_by_window_count(&self) -> bool {
        matches!(self, DetectionAlgorithm::Direct)
    }
}

impl Default for DetectionAlgorithm {
    fn default() -> Self {
        Self::Direct
    }
}

impl fmt::Display for DetectionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DetectionAlgorithm {
    type Err = OscillationError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "direct" | "autocorr-fft" => Ok(Self::Direct),
            "svd" | "svd-filtered" | "autocorr-svd-fft" => Ok(Self::SvdFiltered),
            _ => Err(OscillationError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

/// Validated engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillationConfig {
    /// Minimum peak-to-total power ratio, in (0, 1]
    pub sensitivity: f64,
    /// Frames per autocorrelation window; even and positive
    pub sample_length: usize,
    /// Candidate pattern producer
    pub algorithm: DetectionAlgorithm,
}

impl Default for OscillationConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            sample_length: DEFAULT_SAMPLE_LENGTH,
            algorithm: DetectionAlgorithm::Direct,
        }
    }
}

impl OscillationConfig {
    pub fn new(sensitivity: f64, sample_length: usize, algorithm: DetectionAlgorithm) -> Result<Self> {
        let config = Self {
            sensitivity,
            sample_length,
            algorithm,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Check the invariants every run depends on
    pub fn validate(&self) -> Result<()> {
        if self.sample_length == 0 || self.sample_length % 2 != 0 {
            return Err(OscillationError::Configuration(format!(
                "sample length must be even and positive, got {}",
                self.sample_length
            )));
        }
        if !(self.sensitivity > 0.0 && self.sensitivity <= 1.0) {
            return Err(OscillationError::Configuration(format!(
                "sensitivity must lie in (0, 1], got {}",
                self.sensitivity
            )));
        }
        Ok(())
    }

    /// Number of rows in the oscillation-rate axis
    pub fn rate_bin_count(&self) -> usize {
        self.sample_length / 2
    }
}

/// Builder for custom configurations
pub struct ConfigBuilder {
    config: OscillationConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: OscillationConfig::default(),
        }
    }

    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.config.sensitivity = sensitivity;
        self
    }

    pub fn sample_length(mut self, sample_length: usize) -> Self {
        self.config.sample_length = sample_length;
        self
    }

    pub fn algorithm(mut self, algorithm: DetectionAlgorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Parse and set the algorithm by name
    pub fn algorithm_name(self, name: &str) -> Result<Self> {
        let algorithm = name.parse()?;
        Ok(self.algorithm(algorithm))
    }

    pub fn build(self) -> Result<OscillationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial configuration document; missing fields fall back to defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub sensitivity: Option<f64>,
    pub sample_length: Option<usize>,
    pub algorithm: Option<String>,
}

impl ConfigFile {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| OscillationError::Configuration(format!("malformed config: {}", e)))
    }

    pub fn into_config(self) -> Result<OscillationConfig> {
        let mut builder = ConfigBuilder::new();
        if let Some(sensitivity) = self.sensitivity {
            builder = builder.sensitivity(sensitivity);
        }
        if let Some(sample_length) = self.sample_length {
            builder = builder.sample_length(sample_length);
        }
        if let Some(name) = self.algorithm.as_deref() {
            builder = builder.algorithm_name(name)?;
        }
        builder.build()
    }
}
