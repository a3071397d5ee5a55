// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

use std::fs;

use anyhow::{Context, Result};

pub use args::Args;
pub use output::{format_analysis, print_analysis, print_json};

use crate::config::ConfigFile;
use crate::core::{OscillationEngine, SpectrogramMatrix};
use crate::testgen::demo_fixture;

/// Run the CLI with parsed arguments
pub fn run(args: &Args) -> Result<()> {
    let file = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            Some(ConfigFile::from_json(&text)?)
        }
        None => None,
    };
    let config = args.resolve_config(file)?;
    let engine = OscillationEngine::new(config)?;

    let matrix = match &args.input {
        Some(path) => load_matrix(path)?,
        None => demo_fixture(),
    };

    let analysis = engine.run(&matrix)?;

    if args.json {
        print_json(&analysis)?;
    } else {
        print_analysis(&analysis, args.frames_per_second, args.verbose);
    }
    Ok(())
}

fn load_matrix(path: &std::path::Path) -> Result<SpectrogramMatrix> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spectrogram {}", path.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text)
        .with_context(|| format!("Spectrogram {} is not a JSON array of rows", path.display()))?;
    Ok(SpectrogramMatrix::from_rows(rows)?)
}
