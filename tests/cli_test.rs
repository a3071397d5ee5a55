// tests/cli_test.rs
//
// Runs the oscdetect binary against generated inputs.

mod test_utils;

use std::fs;

use test_utils::{run_oscdetect, scratch_dir};

#[test]
fn demo_json_output_parses() {
    let output = run_oscdetect()
        .args(["--demo", "--json"])
        .output()
        .expect("Failed to execute oscdetect");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let index = value["spectral_index"].as_array().expect("spectral_index array");
    assert_eq!(index.len(), 32);
    assert_eq!(value["config"]["algorithm"], "direct");
}

#[test]
fn matrix_file_is_analyzed() {
    let dir = scratch_dir("cli_matrix");
    let path = dir.join("matrix.json");
    let rows: Vec<Vec<f64>> = (0..256)
        .map(|t| {
            let phase = 2.0 * std::f64::consts::PI * t as f64 / 16.0;
            vec![1.0 + 0.5 * phase.cos() + 0.3 * (2.0 * phase).cos(); 2]
        })
        .collect();
    fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let output = run_oscdetect()
        .arg("--input")
        .arg(&path)
        .args(["--algorithm", "svd", "--json"])
        .output()
        .expect("Failed to execute oscdetect");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"]["algorithm"], "svd-filtered");
    assert!(value["spectral_index"][0].as_f64().unwrap() > 0.0);
}

#[test]
fn unsupported_algorithm_exits_with_error() {
    let output = run_oscdetect()
        .args(["--demo", "--algorithm", "autocorr-wpd"])
        .output()
        .expect("Failed to execute oscdetect");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported algorithm"));
}

#[test]
fn odd_sample_length_exits_with_error() {
    let output = run_oscdetect()
        .args(["--demo", "--sample-length", "127"])
        .output()
        .expect("Failed to execute oscdetect");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration error"));
}
