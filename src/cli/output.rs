//! Output formatting for CLI results

use colorful::Colorful;

use crate::detection::OscillationAnalysis;

/// Format analysis result for terminal output
pub fn format_analysis(
    analysis: &OscillationAnalysis,
    frames_per_second: Option<f64>,
    verbose: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} bins x {} rate bins ({}, sensitivity {:.2}, {} windows of {} frames)\n",
        "Oscillation analysis:".bold(),
        analysis.bin_count(),
        analysis.rate_bin_count(),
        analysis.config.algorithm,
        analysis.config.sensitivity,
        analysis.window_count,
        analysis.config.sample_length,
    ));

    match analysis.peak_bin() {
        Some(bin) => output.push_str(&format!(
            "  Strongest band: bin {} (index {:.3})\n",
            bin.to_string().as_str().green(),
            analysis.spectral_index[bin]
        )),
        None => output.push_str(&format!("  {}\n", "No oscillations detected".yellow())),
    }

    for (bin, (index, summary)) in analysis
        .spectral_index
        .iter()
        .zip(&analysis.bins)
        .enumerate()
    {
        if *index <= 0.0 && !verbose {
            continue;
        }
        let rate = match (summary.dominant_rate_bin, frames_per_second) {
            (Some(row), Some(fps)) => format!("rate bin {} ({:.2} Hz)", row, analysis.rate_hz(row, fps)),
            (Some(row), None) => format!("rate bin {}", row),
            (None, _) => "-".to_string(),
        };
        output.push_str(&format!(
            "    bin {:>4}  index {:>8.3}  {}  [{}/{} accepted]\n",
            bin, index, rate, summary.accepted, summary.candidates
        ));
    }

    if !analysis.diagnostics.is_empty() {
        output.push_str(&format!(
            "  {} degenerate bin(s)\n",
            analysis.diagnostics.len().to_string().as_str().red()
        ));
        if verbose {
            for d in &analysis.diagnostics {
                output.push_str(&format!("    bin {:>4}  {}\n", d.bin, d.kind.description()));
            }
        }
    }

    output
}

/// Print analysis as text
pub fn print_analysis(analysis: &OscillationAnalysis, frames_per_second: Option<f64>, verbose: bool) {
    print!("{}", format_analysis(analysis, frames_per_second, verbose));
}

/// Print analysis as JSON
pub fn print_json(analysis: &OscillationAnalysis) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}
