// src/core/spectrogram.rs
//
// Read-only time-frequency input matrix, indexed [frame, frequency bin].

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{OscillationError, Result};

/// Spectrogram supplied by the caller, shape `[frame_count, bin_count]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramMatrix {
    data: Array2<f64>,
}

impl SpectrogramMatrix {
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build from frame rows; every row must have the same number of bins
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let frame_count = rows.len();
        let bin_count = rows.first().map(|r| r.len()).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != bin_count) {
            return Err(OscillationError::InvalidInput(format!(
                "frame {} has {} bins, expected {}",
                i,
                row.len(),
                bin_count
            )));
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((frame_count, bin_count), flat)
            .map_err(|e| OscillationError::InvalidInput(e.to_string()))?;
        Ok(Self { data })
    }

    pub fn frame_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn bin_count(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

impl From<Array2<f64>> for SpectrogramMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let matrix = SpectrogramMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(matrix.frame_count(), 2);
        assert_eq!(matrix.bin_count(), 3);
        assert_eq!(matrix.view()[[1, 2]], 6.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = SpectrogramMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, OscillationError::InvalidInput(_)));
    }

    #[test]
    fn test_from_rows_empty() {
        let matrix = SpectrogramMatrix::from_rows(Vec::new()).unwrap();
        assert_eq!(matrix.frame_count(), 0);
        assert_eq!(matrix.bin_count(), 0);
    }
}
