//! Analysis result types

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::config::OscillationConfig;
use crate::core::dsp::{argmax, Degeneracy};

/// Why a frequency bin produced an all-zero column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Band signal has zero standard deviation
    ZeroVariance,
    /// Band signal contains NaN or infinity
    NonFinite,
}

impl DiagnosticKind {
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticKind::ZeroVariance => "constant band signal",
            DiagnosticKind::NonFinite => "non-finite values in band signal",
        }
    }
}

impl From<Degeneracy> for DiagnosticKind {
    fn from(d: Degeneracy) -> Self {
        match d {
            Degeneracy::ZeroVariance => DiagnosticKind::ZeroVariance,
            Degeneracy::NonFinite => DiagnosticKind::NonFinite,
        }
    }
}

/// A recovered per-bin numeric problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinDiagnostic {
    pub bin: usize,
    pub kind: DiagnosticKind,
}

/// What happened inside one frequency bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinSummary {
    /// Candidate patterns produced by the extractor
    pub candidates: usize,
    /// Candidates that passed the significance test
    pub accepted: usize,
    /// Row of the column maximum, if the column is non-zero
    pub dominant_rate_bin: Option<usize>,
}

/// Output of one engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillationAnalysis {
    /// Frequency-by-oscillation matrix, shape `[sample_length / 2, bin_count]`
    pub matrix: Array2<f64>,
    /// Per-bin sum over rows 1.., length `bin_count`
    pub spectral_index: Vec<f64>,
    pub diagnostics: Vec<BinDiagnostic>,
    pub bins: Vec<BinSummary>,
    /// Complete windows per band signal
    pub window_count: usize,
    pub config: OscillationConfig,
}

impl OscillationAnalysis {
    pub fn rate_bin_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn bin_count(&self) -> usize {
        self.matrix.ncols()
    }

    /// Oscillation vector of one frequency bin
    pub fn column(&self, bin: usize) -> Option<Vec<f64>> {
        if bin >= self.bin_count() {
            return None;
        }
        Some(self.matrix.column(bin).to_vec())
    }

    pub fn is_degenerate(&self, bin: usize) -> bool {
        self.diagnostics.iter().any(|d| d.bin == bin)
    }

    /// Frequency bin with the largest spectral index, ignoring all-zero bins
    pub fn peak_bin(&self) -> Option<usize> {
        argmax(&self.spectral_index).filter(|&b| self.spectral_index[b] > 0.0)
    }

    /// Rate-bin index of a modulation repeating every `period_frames` frames.
    ///
    /// The DC bin is dropped during scoring, so FFT bin `f` lands on row `f - 1`.
    pub fn rate_bin_for_period(&self, period_frames: f64) -> Option<usize> {
        if !(period_frames > 0.0) {
            return None;
        }
        let cycles = (self.config.sample_length as f64 / period_frames).round() as usize;
        cycles
            .checked_sub(1)
            .filter(|&row| row < self.rate_bin_count())
    }

    /// Oscillations per second represented by a rate bin
    pub fn rate_hz(&self, rate_bin: usize, frames_per_second: f64) -> f64 {
        (rate_bin + 1) as f64 * frames_per_second / self.config.sample_length as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(spectral_index: Vec<f64>) -> OscillationAnalysis {
        let bins = spectral_index.len();
        OscillationAnalysis {
            matrix: Array2::zeros((64, bins)),
            spectral_index,
            diagnostics: vec![BinDiagnostic { bin: 1, kind: DiagnosticKind::ZeroVariance }],
            bins: vec![BinSummary::default(); bins],
            window_count: 2,
            config: OscillationConfig::default(),
        }
    }

    #[test]
    fn test_rate_bin_for_period() {
        let a = analysis(vec![0.0]);
        assert_eq!(a.rate_bin_for_period(16.0), Some(7));
        assert_eq!(a.rate_bin_for_period(2.0), Some(63));
        assert_eq!(a.rate_bin_for_period(1.0), None);
        assert_eq!(a.rate_bin_for_period(1000.0), None);
        assert_eq!(a.rate_bin_for_period(0.0), None);
    }

    #[test]
    fn test_rate_hz() {
        let a = analysis(vec![0.0]);
        // 8 cycles per 128 frames at 100 frames/s
        assert!((a.rate_hz(7, 100.0) - 6.25).abs() < 1e-12);
    }

    #[test]
    fn test_peak_bin_and_degeneracy() {
        let a = analysis(vec![0.5, 0.0, 2.0]);
        assert_eq!(a.peak_bin(), Some(2));
        assert!(a.is_degenerate(1));
        assert!(!a.is_degenerate(0));
        assert_eq!(analysis(vec![0.0, 0.0]).peak_bin(), None);
    }
}
