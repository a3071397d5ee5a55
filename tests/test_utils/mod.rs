// tests/test_utils/mod.rs
//
// Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use oscdetect::{DetectionAlgorithm, OscillationAnalysis, OscillationConfig, OscillationEngine, SpectrogramMatrix};

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_oscdetect"))
}

pub fn run_oscdetect() -> Command {
    Command::new(binary_path())
}

/// Scratch directory under target/ for files written by tests
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target/test-scratch")
        .join(name);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

pub fn config(sensitivity: f64, sample_length: usize, algorithm: DetectionAlgorithm) -> OscillationConfig {
    OscillationConfig::new(sensitivity, sample_length, algorithm).expect("valid test config")
}

pub fn analyze(matrix: &SpectrogramMatrix, config: OscillationConfig) -> OscillationAnalysis {
    OscillationEngine::new(config)
        .expect("valid engine config")
        .run(matrix)
        .expect("analysis should succeed")
}

/// Row index of the largest value in a column
pub fn peak_row(column: &[f64]) -> usize {
    column
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc })
        .0
}
