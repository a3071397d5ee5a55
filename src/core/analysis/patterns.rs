// src/core/analysis/patterns.rs
//
// Candidate periodic patterns per band, drawn from the windowed
// autocorrelation matrix either directly or through an SVD filter.

use nalgebra::DMatrix;
use ndarray::Array2;

use crate::config::DetectionAlgorithm;

/// Share of singular-value energy the SVD filter must retain
pub const ENERGY_FRACTION_THRESHOLD: f64 = 0.9;

/// Candidate pattern vectors, each of length `sample_length`
pub fn extract_candidates(algorithm: DetectionAlgorithm, acf: &Array2<f64>) -> Vec<Vec<f64>> {
    match algorithm {
        DetectionAlgorithm::Direct => direct_candidates(acf),
        DetectionAlgorithm::SvdFiltered => svd_candidates(acf),
    }
}

fn direct_candidates(acf: &Array2<f64>) -> Vec<Vec<f64>> {
    acf.columns().into_iter().map(|column| column.to_vec()).collect()
}

fn svd_candidates(acf: &Array2<f64>) -> Vec<Vec<f64>> {
    let (rows, cols) = acf.dim();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let na_matrix = DMatrix::from_fn(rows, cols, |i, j| acf[[i, j]]);
    let svd = na_matrix.svd(true, false);
    let u = match svd.u {
        Some(u) => u,
        None => return Vec::new(),
    };

    // Descending singular values; indices keep the link to U's columns
    let values = svd.singular_values;
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let sorted: Vec<f64> = order.iter().map(|&i| values[i]).collect();

    let k = significant_component_count(&sorted, ENERGY_FRACTION_THRESHOLD);
    log::trace!("svd kept {} of {} components", k, sorted.len());

    order
        .iter()
        .take(k)
        .map(|&c| {
            let mut vector: Vec<f64> = u.column(c).iter().copied().collect();
            // Singular vectors have arbitrary sign
            if vector.first().copied().unwrap_or(0.0) < 0.0 {
                vector.iter_mut().for_each(|x| *x = -*x);
            }
            vector
        })
        .collect()
}

/// Running `Σ s_i² / Σ s²` over singular values in the given order
pub fn cumulative_energy_fractions(singular_values: &[f64]) -> Vec<f64> {
    let total: f64 = singular_values.iter().map(|s| s * s).sum();
    if total <= 0.0 {
        return vec![0.0; singular_values.len()];
    }
    let mut running = 0.0;
    singular_values
        .iter()
        .map(|s| {
            running += s * s;
            running / total
        })
        .collect()
}

/// Smallest k whose cumulative energy fraction exceeds `threshold`.
///
/// Expects singular values in descending order. Returns 0 when all are zero.
pub fn significant_component_count(singular_values: &[f64], threshold: f64) -> usize {
    let fractions = cumulative_energy_fractions(singular_values);
    if fractions.last().copied().unwrap_or(0.0) <= 0.0 {
        return 0;
    }
    fractions
        .iter()
        .position(|&f| f > threshold)
        .map(|i| i + 1)
        .unwrap_or(singular_values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_direct_uses_every_column() {
        let acf = Array2::from_shape_fn((6, 3), |(i, j)| (i * 10 + j) as f64);
        let candidates = extract_candidates(DetectionAlgorithm::Direct, &acf);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[2], vec![2.0, 12.0, 22.0, 32.0, 42.0, 52.0]);
    }

    #[test]
    fn test_energy_selection_minimal_k() {
        // energies 16, 4, 1, ... total 21; 16/21 = 0.76, 20/21 = 0.95
        assert_eq!(significant_component_count(&[4.0, 2.0, 1.0], 0.9), 2);
        assert_eq!(significant_component_count(&[10.0, 1.0, 0.5], 0.9), 1);
        assert_eq!(significant_component_count(&[1.0, 1.0, 1.0, 1.0], 0.9), 4);
        assert_eq!(significant_component_count(&[0.0, 0.0], 0.9), 0);
        assert_eq!(significant_component_count(&[], 0.9), 0);
    }

    #[test]
    fn test_cumulative_fractions_monotone() {
        let fractions = cumulative_energy_fractions(&[5.0, 3.0, 2.0, 1.0, 0.5]);
        assert!(fractions.windows(2).all(|w| w[1] >= w[0]));
        assert!((fractions.last().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_svd_rank_one_gives_single_candidate() {
        let base: Vec<f64> = (0..16).map(|i| (i as f64 * 0.7).cos()).collect();
        let acf = Array2::from_shape_fn((16, 3), |(i, j)| base[i] * (j + 1) as f64);
        let candidates = extract_candidates(DetectionAlgorithm::SvdFiltered, &acf);
        assert_eq!(candidates.len(), 1);

        let v = &candidates[0];
        assert!(v[0] >= 0.0);
        let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        // Parallel to the shared column shape
        let base_norm: f64 = base.iter().map(|x| x * x).sum::<f64>().sqrt();
        for (a, b) in v.iter().zip(&base) {
            assert!((a - b / base_norm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_svd_empty_matrix() {
        let acf = Array2::<f64>::zeros((8, 0));
        assert!(extract_candidates(DetectionAlgorithm::SvdFiltered, &acf).is_empty());
    }
}
