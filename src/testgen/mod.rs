// src/testgen/mod.rs
//
// Synthetic spectrogram generation for tests and the CLI demo mode.
// Produces band-limited amplitude modulations on top of a flat background,
// with optional seeded noise so every fixture is reproducible.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::core::SpectrogramMatrix;

/// A periodic amplitude modulation confined to a range of frequency bins
#[derive(Debug, Clone)]
pub struct ModulatedBand {
    /// First bin covered (inclusive)
    pub first_bin: usize,
    /// Last bin covered (inclusive)
    pub last_bin: usize,
    /// Modulation period in frames
    pub period_frames: f64,
    /// Amplitude of the fundamental
    pub depth: f64,
    /// Amplitude of the second harmonic relative to `depth`
    pub harmonic_weight: f64,
}

impl ModulatedBand {
    pub fn new(first_bin: usize, last_bin: usize, period_frames: f64) -> Self {
        Self {
            first_bin,
            last_bin,
            period_frames,
            depth: 0.5,
            harmonic_weight: 0.0,
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_harmonic(mut self, weight: f64) -> Self {
        self.harmonic_weight = weight;
        self
    }

    fn covers(&self, bin: usize) -> bool {
        bin >= self.first_bin && bin <= self.last_bin
    }

    fn value_at(&self, frame: usize) -> f64 {
        let phase = 2.0 * PI * frame as f64 / self.period_frames;
        self.depth * (phase.cos() + self.harmonic_weight * (2.0 * phase).cos())
    }
}

/// Builder for synthetic spectrograms
#[derive(Debug, Clone)]
pub struct SyntheticSpectrogram {
    frame_count: usize,
    bin_count: usize,
    background: f64,
    noise_amplitude: f64,
    seed: u64,
    bands: Vec<ModulatedBand>,
}

impl SyntheticSpectrogram {
    pub fn new(frame_count: usize, bin_count: usize) -> Self {
        Self {
            frame_count,
            bin_count,
            background: 1.0,
            noise_amplitude: 0.0,
            seed: 0,
            bands: Vec::new(),
        }
    }

    pub fn background(mut self, level: f64) -> Self {
        self.background = level;
        self
    }

    /// Uniform noise in `[-amplitude, amplitude]` added to every cell
    pub fn noise(mut self, amplitude: f64, seed: u64) -> Self {
        self.noise_amplitude = amplitude;
        self.seed = seed;
        self
    }

    pub fn band(mut self, band: ModulatedBand) -> Self {
        self.bands.push(band);
        self
    }

    pub fn build(&self) -> SpectrogramMatrix {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut data = Array2::from_elem((self.frame_count, self.bin_count), self.background);

        for ((frame, bin), cell) in data.indexed_iter_mut() {
            for band in self.bands.iter().filter(|b| b.covers(bin)) {
                *cell += band.value_at(frame);
            }
            if self.noise_amplitude > 0.0 {
                *cell += rng.gen_range(-self.noise_amplitude..=self.noise_amplitude);
            }
        }

        SpectrogramMatrix::new(data)
    }
}

/// Single-bin pulse train used throughout the tests: period 16 frames,
/// 256 frames, fundamental plus a 0.6 second harmonic
pub fn pulse_train_fixture() -> SpectrogramMatrix {
    SyntheticSpectrogram::new(256, 1)
        .band(ModulatedBand::new(0, 0, 16.0).with_harmonic(0.6))
        .build()
}

/// Spectrogram with a 12-bin-wide modulated band in the middle of 32 bins
/// plus low-level noise everywhere
pub fn demo_fixture() -> SpectrogramMatrix {
    SyntheticSpectrogram::new(1024, 32)
        .noise(0.05, 7)
        .band(ModulatedBand::new(10, 21, 16.0).with_depth(0.6).with_harmonic(0.4))
        .build()
}
