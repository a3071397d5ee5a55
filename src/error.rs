// src/error.rs
//
// Error types for the oscillation detection engine

use thiserror::Error;

/// Errors surfaced before or instead of a completed analysis.
///
/// Per-bin numeric problems (constant or non-finite band signals) are not
/// errors; they are reported as [`crate::detection::BinDiagnostic`] entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OscillationError {
    /// Invalid sample length or sensitivity
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Algorithm name that has no implementation
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Malformed caller-supplied matrix
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Caller cancelled the run between two frequency bins
    #[error("analysis cancelled after {completed} of {total} frequency bins")]
    Cancelled { completed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, OscillationError>;
