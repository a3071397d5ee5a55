//! Window function implementations

use std::f64::consts::PI;

/// Symmetric Hamming window, `0.54 - 0.46·cos(2πi / (n-1))`
pub fn hamming(size: usize) -> Vec<f64> {
    if size < 2 {
        return vec![1.0; size];
    }
    let denom = (size - 1) as f64;
    (0..size)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / denom).cos())
        .collect()
}
