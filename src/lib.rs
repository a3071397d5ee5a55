//! oscdetect - Detect periodic amplitude modulations in spectrograms
//!
//! Finds repetitive pulsed activity (e.g. pulsed animal calls) inside
//! individual frequency bands of a spectrogram and summarizes it as an
//! oscillation-rate-by-frequency matrix plus a per-frequency spectral index.
//!
//! ## Pipeline
//!
//! For every frequency bin, independently and in parallel:
//!
//! 1. Average the bin with its neighbours and z-score the resulting time signal
//! 2. Split it into windows of `sample_length` frames and autocorrelate each
//! 3. Take candidate patterns, either every window (`Direct`) or the dominant
//!    left singular vectors (`SvdFiltered`)
//! 4. Score each candidate's Hamming-windowed power spectrum; keep peaks whose
//!    share of total power exceeds `sensitivity`
//! 5. Accumulate, log-compress and write the bin's column
//!
//! The spectral index is each column summed from row 1 onwards.
//!
//! ## Module Structure
//!
//! - `core` - Engine, analysis stages and DSP utilities
//! - `config` - Engine configuration
//! - `detection` - Result and diagnostic types
//! - `testgen` - Synthetic spectrogram fixtures
//! - `cli` - Command-line front end
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oscdetect::{OscillationConfig, OscillationEngine, SpectrogramMatrix};
//!
//! let matrix = SpectrogramMatrix::from_rows(frames)?;
//! let engine = OscillationEngine::new(OscillationConfig::default())?;
//! let analysis = engine.run(&matrix)?;
//!
//! println!("Spectral index: {:?}", analysis.spectral_index);
//! ```

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Engine configuration
pub mod config;

// Result types
pub mod detection;

pub mod error;

// Synthetic fixtures
pub mod testgen;

pub use config::{ConfigBuilder, ConfigFile, DetectionAlgorithm, OscillationConfig};
pub use core::{CancellationToken, OscillationEngine, SpectrogramMatrix};
pub use detection::{BinDiagnostic, BinSummary, DiagnosticKind, OscillationAnalysis};
pub use error::OscillationError;

/// Validate `config`, then analyze `matrix`
pub fn analyze_spectrogram(
    matrix: &SpectrogramMatrix,
    config: OscillationConfig,
) -> Result<OscillationAnalysis, OscillationError> {
    OscillationEngine::new(config)?.run(matrix)
}
