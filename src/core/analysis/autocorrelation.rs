// src/core/analysis/autocorrelation.rs
//
// Splits a band signal into fixed-length windows and stores each window's
// autocorrelation as one column of a [lag x window] matrix.

use ndarray::Array2;

use crate::core::dsp::autocorrelation;

/// Number of complete windows; trailing frames are dropped
pub fn window_count(signal_len: usize, sample_length: usize) -> usize {
    if sample_length == 0 {
        return 0;
    }
    signal_len / sample_length
}

/// Autocorrelation matrix of shape `[sample_length, window_count]`
pub fn windowed_autocorrelation(signal: &[f64], sample_length: usize) -> Array2<f64> {
    let windows = window_count(signal.len(), sample_length);
    let mut matrix = Array2::<f64>::zeros((sample_length, windows));

    for (w, chunk) in signal.chunks_exact(sample_length).take(windows).enumerate() {
        let acf = autocorrelation(chunk);
        for (lag, value) in acf.into_iter().enumerate() {
            matrix[[lag, w]] = value;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_discarded() {
        assert_eq!(window_count(300, 128), 2);
        assert_eq!(window_count(127, 128), 0);
        let signal: Vec<f64> = (0..300).map(|i| (i % 7) as f64 - 3.0).collect();
        let matrix = windowed_autocorrelation(&signal, 128);
        assert_eq!(matrix.dim(), (128, 2));
    }

    #[test]
    fn test_columns_match_per_window_acf() {
        let signal: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let matrix = windowed_autocorrelation(&signal, 8);
        assert_eq!(matrix.dim(), (8, 2));
        for w in 0..2 {
            assert_eq!(matrix[[0, w]], 1.0);
            assert_eq!(matrix[[1, w]], -1.0);
            assert_eq!(matrix[[7, w]], -1.0);
        }
    }

    #[test]
    fn test_short_signal_yields_empty_matrix() {
        let matrix = windowed_autocorrelation(&[1.0, 2.0], 4);
        assert_eq!(matrix.dim(), (4, 0));
    }
}
