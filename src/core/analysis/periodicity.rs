// src/core/analysis/periodicity.rs
//
// Scores a candidate pattern's dominant oscillation rate from its
// Hamming-windowed power spectrum and accumulates accepted peaks.

use crate::core::dsp::{argmax, mean, FftProcessor};

/// Damping applied to the lowest non-DC bin, which carries a known bias
pub const LOW_BIN_CORRECTION: f64 = 0.66;

/// Dominant periodicity of one candidate pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicityScore {
    /// Rate-bin index (FFT bin minus one, DC removed)
    pub rate_bin: usize,
    /// Power at the peak plus its two neighbours
    pub local_power: f64,
    /// `local_power` over total power
    pub ratio: f64,
}

/// Shared scoring state for one engine run
#[derive(Debug, Clone)]
pub struct PeriodicityEstimator {
    fft: FftProcessor,
    sensitivity: f64,
    rate_bins: usize,
}

impl PeriodicityEstimator {
    pub fn new(sample_length: usize, sensitivity: f64) -> Self {
        Self {
            fft: FftProcessor::new(sample_length),
            sensitivity,
            rate_bins: sample_length / 2,
        }
    }

    /// Power spectrum of the detrended pattern with DC dropped
    pub fn power_spectrum(&self, pattern: &[f64]) -> Vec<f64> {
        let m = mean(pattern);
        let detrended: Vec<f64> = pattern.iter().map(|x| x - m).collect();

        let mut spectrum = self.fft.magnitude_spectrum(&detrended);
        spectrum.remove(0);
        if let Some(first) = spectrum.first_mut() {
            *first *= LOW_BIN_CORRECTION;
        }

        spectrum.into_iter().map(|x| x * x).collect()
    }

    /// Peak location and significance; `None` for a flat (all-zero) spectrum
    pub fn score(&self, pattern: &[f64]) -> Option<PeriodicityScore> {
        let power = self.power_spectrum(pattern);
        let total: f64 = power.iter().sum();
        if !(total > 0.0) {
            return None;
        }

        let m = argmax(&power)?;
        let last = power.len() - 1;
        let below = if m == 0 { power[m] } else { power[m - 1] };
        let above = if m == last { power[m] } else { power[m + 1] };
        let local_power = power[m] + below + above;

        Some(PeriodicityScore {
            rate_bin: m,
            local_power,
            ratio: local_power / total,
        })
    }

    /// Score that passes the ratio test and falls inside the output range
    pub fn accept(&self, pattern: &[f64]) -> Option<PeriodicityScore> {
        self.score(pattern)
            .filter(|s| s.ratio > self.sensitivity && s.rate_bin < self.rate_bins)
    }

    /// Sum accepted local powers per rate bin; returns the accepted count too
    pub fn accumulate(&self, candidates: &[Vec<f64>]) -> (Vec<f64>, usize) {
        let mut oscillations = vec![0.0; self.rate_bins];
        let mut accepted = 0;
        for pattern in candidates {
            if let Some(score) = self.accept(pattern) {
                oscillations[score.rate_bin] += score.local_power;
                accepted += 1;
            }
        }
        (oscillations, accepted)
    }
}
