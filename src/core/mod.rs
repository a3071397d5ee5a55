//! Core analysis engine and DSP utilities

pub mod analysis;
pub mod dsp;
pub mod engine;
pub mod spectrogram;

pub use engine::{CancellationToken, OscillationEngine};
pub use spectrogram::SpectrogramMatrix;
