//! FFT processing with windowing

use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use super::windows::hamming;

/// Hamming-windowed forward FFT of a fixed size.
///
/// The plan and window are computed once; `&self` methods are safe to call
/// from many worker threads at the same time.
#[derive(Clone)]
pub struct FftProcessor {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    fft_size: usize,
}

impl FftProcessor {
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: hamming(fft_size),
            fft_size,
        }
    }

    /// Non-redundant magnitude spectrum, bins `0..=fft_size/2`
    pub fn magnitude_spectrum(&self, samples: &[f64]) -> Vec<f64> {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.fft_size)
            .zip(self.window.iter())
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();

        // Zero-pad if necessary
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer[..self.fft_size / 2 + 1]
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}

impl std::fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftProcessor")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_spectrum_length() {
        let processor = FftProcessor::new(128);
        let spectrum = processor.magnitude_spectrum(&vec![1.0; 128]);
        assert_eq!(spectrum.len(), 65);
    }

    #[test]
    fn test_sine_peak_bin() {
        let processor = FftProcessor::new(128);
        let samples: Vec<f64> = (0..128)
            .map(|i| (2.0 * PI * 10.0 * i as f64 / 128.0).sin())
            .collect();
        let spectrum = processor.magnitude_spectrum(&samples);
        let peak = spectrum
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &m)| if m > acc.1 { (i, m) } else { acc })
            .0;
        assert_eq!(peak, 10);
    }
}
