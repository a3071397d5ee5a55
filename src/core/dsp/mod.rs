//! Digital Signal Processing utilities

pub mod fft;
pub mod stats;
pub mod windows;

pub use fft::FftProcessor;
pub use stats::{argmax, autocorrelation, log_compress, mean, std_dev, z_score, Degeneracy};
pub use windows::hamming;
