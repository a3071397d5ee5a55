// src/core/analysis/assembler.rs
//
// Per-bin post-processing, assembly of the frequency-by-oscillation matrix
// and its reduction to a per-bin spectral index.

use ndarray::Array2;

use crate::config::DetectionAlgorithm;
use crate::core::dsp::log_compress;

/// Rows skipped by the spectral index (near-zero oscillation rate)
pub const SPECTRAL_INDEX_SKIP_ROWS: usize = 1;

/// Window-count averaging (direct variant only) followed by log compression
pub fn finalize_oscillations(
    oscillations: &mut [f64],
    algorithm: DetectionAlgorithm,
    window_count: usize,
) {
    if algorithm.normalizes_by_window_count() && window_count > 0 {
        let n = window_count as f64;
        oscillations.iter_mut().for_each(|v| *v /= n);
    }
    log_compress(oscillations);
}

/// Place each bin's oscillation vector as a column; shape `[rate_bins, columns.len()]`
pub fn assemble_matrix(columns: &[Vec<f64>], rate_bins: usize) -> Array2<f64> {
    let mut matrix = Array2::<f64>::zeros((rate_bins, columns.len()));
    for (bin, column) in columns.iter().enumerate() {
        for (row, &value) in column.iter().take(rate_bins).enumerate() {
            matrix[[row, bin]] = value;
        }
    }
    matrix
}

/// Column sums over rows `skip_rows..`
pub fn spectral_index(matrix: &Array2<f64>, skip_rows: usize) -> Vec<f64> {
    matrix
        .columns()
        .into_iter()
        .map(|column| column.iter().skip(skip_rows).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_direct_averages_before_compression() {
        let mut values = vec![0.0, 18.0, 1.5];
        finalize_oscillations(&mut values, DetectionAlgorithm::Direct, 2);
        assert_eq!(values[0], 0.0);
        assert!((values[1] - 1.0).abs() < 1e-12);
        assert_eq!(values[2], 0.0);
    }

    #[test]
    fn test_svd_keeps_absolute_sums() {
        let mut values = vec![0.0, 18.0, 1.5];
        finalize_oscillations(&mut values, DetectionAlgorithm::SvdFiltered, 2);
        assert!((values[1] - 19f64.log10()).abs() < 1e-12);
        assert!((values[2] - 2.5f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_windows_does_not_divide() {
        let mut values = vec![9.0];
        finalize_oscillations(&mut values, DetectionAlgorithm::Direct, 0);
        assert!((values[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_assemble_and_reduce() {
        let columns = vec![vec![5.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]];
        let matrix = assemble_matrix(&columns, 3);
        assert_eq!(matrix, array![[5.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        assert_eq!(spectral_index(&matrix, SPECTRAL_INDEX_SKIP_ROWS), vec![3.0, 0.0]);
    }

    #[test]
    fn test_reduce_empty_matrix() {
        let matrix = Array2::<f64>::zeros((64, 0));
        assert!(spectral_index(&matrix, 1).is_empty());
    }
}
