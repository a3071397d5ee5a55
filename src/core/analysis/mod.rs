//! Oscillation analysis stages
//!
//! Each frequency bin flows through:
//! - Band signal preparation (3-bin average, z-score)
//! - Windowed autocorrelation
//! - Candidate pattern extraction (direct or SVD-filtered)
//! - Periodicity scoring and accumulation
//! - Matrix assembly and spectral index reduction

mod assembler;
mod autocorrelation;
mod patterns;
mod periodicity;
mod signal;

pub use assembler::{
    assemble_matrix, finalize_oscillations, spectral_index, SPECTRAL_INDEX_SKIP_ROWS,
};
pub use autocorrelation::{window_count, windowed_autocorrelation};
pub use patterns::{
    cumulative_energy_fractions, extract_candidates, significant_component_count,
    ENERGY_FRACTION_THRESHOLD,
};
pub use periodicity::{PeriodicityEstimator, PeriodicityScore, LOW_BIN_CORRECTION};
pub use signal::{band_average, prepare_band_signal};
