// src/core/engine.rs
//
// Frequency-by-oscillation-rate detection engine. Every frequency bin is
// processed independently on the rayon pool and owns one output column.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use super::analysis::{
    assemble_matrix, extract_candidates, finalize_oscillations, prepare_band_signal,
    spectral_index, window_count, windowed_autocorrelation, PeriodicityEstimator,
    SPECTRAL_INDEX_SKIP_ROWS,
};
use super::dsp::argmax;
use super::spectrogram::SpectrogramMatrix;
use crate::config::{ConfigBuilder, OscillationConfig};
use crate::detection::{BinDiagnostic, BinSummary, DiagnosticKind, OscillationAnalysis};
use crate::error::{OscillationError, Result};

/// Cooperative cancellation flag, checked before each frequency bin
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Result of one frequency bin before assembly
struct BinOutcome {
    column: Vec<f64>,
    summary: BinSummary,
    degeneracy: Option<DiagnosticKind>,
}

/// Detection engine holding a validated configuration and nothing else
#[derive(Debug, Clone)]
pub struct OscillationEngine {
    config: OscillationConfig,
}

impl OscillationEngine {
    /// Validate the configuration up front
    pub fn new(config: OscillationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build from raw values, resolving the algorithm by name
    pub fn from_parts(sensitivity: f64, sample_length: usize, algorithm: &str) -> Result<Self> {
        let config = ConfigBuilder::new()
            .algorithm_name(algorithm)?
            .sensitivity(sensitivity)
            .sample_length(sample_length)
            .build()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OscillationConfig {
        &self.config
    }

    /// Run the full analysis
    pub fn run(&self, matrix: &SpectrogramMatrix) -> Result<OscillationAnalysis> {
        self.run_with_cancel(matrix, &CancellationToken::new())
    }

    /// Run the full analysis, stopping early if `cancel` fires
    pub fn run_with_cancel(
        &self,
        matrix: &SpectrogramMatrix,
        cancel: &CancellationToken,
    ) -> Result<OscillationAnalysis> {
        let start_time = Instant::now();
        let config = self.config;
        let bin_count = matrix.bin_count();
        let frame_count = matrix.frame_count();
        let windows = window_count(frame_count, config.sample_length);

        log::debug!(
            "Oscillation analysis: {} frames x {} bins, {} windows of {} frames, {}",
            frame_count,
            bin_count,
            windows,
            config.sample_length,
            config.algorithm
        );

        if windows == 0 && bin_count > 0 {
            log::warn!(
                "Spectrogram has {} frames, fewer than one window of {}; output will be empty",
                frame_count,
                config.sample_length
            );
        }

        let estimator = PeriodicityEstimator::new(config.sample_length, config.sensitivity);
        let completed = AtomicUsize::new(0);

        let outcomes: Vec<Option<BinOutcome>> = (0..bin_count)
            .into_par_iter()
            .map(|bin| {
                if cancel.is_cancelled() {
                    return None;
                }
                let outcome = self.process_bin(matrix, bin, &estimator);
                completed.fetch_add(1, Ordering::Relaxed);
                Some(outcome)
            })
            .collect();

        if outcomes.iter().any(Option::is_none) {
            let completed = completed.load(Ordering::Relaxed);
            log::info!("Oscillation analysis cancelled at {}/{} bins", completed, bin_count);
            return Err(OscillationError::Cancelled {
                completed,
                total: bin_count,
            });
        }

        let mut columns = Vec::with_capacity(bin_count);
        let mut bins = Vec::with_capacity(bin_count);
        let mut diagnostics = Vec::new();
        for (bin, outcome) in outcomes.into_iter().flatten().enumerate() {
            if let Some(kind) = outcome.degeneracy {
                diagnostics.push(BinDiagnostic { bin, kind });
            }
            columns.push(outcome.column);
            bins.push(outcome.summary);
        }

        let matrix = assemble_matrix(&columns, config.rate_bin_count());
        let index = spectral_index(&matrix, SPECTRAL_INDEX_SKIP_ROWS);

        log::info!(
            "Oscillation analysis finished: {} bins, {} degenerate, {:.1} ms",
            bin_count,
            diagnostics.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(OscillationAnalysis {
            matrix,
            spectral_index: index,
            diagnostics,
            bins,
            window_count: windows,
            config,
        })
    }

    fn process_bin(
        &self,
        matrix: &SpectrogramMatrix,
        bin: usize,
        estimator: &PeriodicityEstimator,
    ) -> BinOutcome {
        let rate_bins = self.config.rate_bin_count();

        let signal = match prepare_band_signal(matrix, bin) {
            Ok(signal) => signal,
            Err(degeneracy) => {
                let kind = DiagnosticKind::from(degeneracy);
                log::warn!("Frequency bin {}: {}, column zeroed", bin, kind.description());
                return BinOutcome {
                    column: vec![0.0; rate_bins],
                    summary: BinSummary::default(),
                    degeneracy: Some(kind),
                };
            }
        };

        let acf = windowed_autocorrelation(&signal, self.config.sample_length);
        let windows = acf.ncols();
        let candidates = extract_candidates(self.config.algorithm, &acf);
        let (mut column, accepted) = estimator.accumulate(&candidates);
        finalize_oscillations(&mut column, self.config.algorithm, windows);

        let dominant_rate_bin = argmax(&column).filter(|&row| column[row] > 0.0);

        log::trace!(
            "Frequency bin {}: {} candidates, {} accepted, dominant rate {:?}",
            bin,
            candidates.len(),
            accepted,
            dominant_rate_bin
        );

        BinOutcome {
            column,
            summary: BinSummary {
                candidates: candidates.len(),
                accepted,
                dominant_rate_bin,
            },
            degeneracy: None,
        }
    }
}
