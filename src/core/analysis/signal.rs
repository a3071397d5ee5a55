// src/core/analysis/signal.rs
//
// Per-band time signal: mean of a 3-bin neighbourhood, then z-scored.

use crate::core::dsp::{z_score, Degeneracy};
use crate::core::spectrogram::SpectrogramMatrix;

/// Average of bins `bin-1..=bin+1` for every frame, clipped at the edges
pub fn band_average(matrix: &SpectrogramMatrix, bin: usize) -> Vec<f64> {
    let view = matrix.view();
    let bin_count = matrix.bin_count();
    let lo = bin.saturating_sub(1);
    let hi = (bin + 1).min(bin_count.saturating_sub(1));
    let width = (hi + 1 - lo) as f64;

    view.rows()
        .into_iter()
        .map(|frame| (lo..=hi).map(|b| frame[b]).sum::<f64>() / width)
        .collect()
}

/// Normalized band signal, or the reason it could not be normalized
pub fn prepare_band_signal(matrix: &SpectrogramMatrix, bin: usize) -> Result<Vec<f64>, Degeneracy> {
    z_score(&band_average(matrix, bin))
}
