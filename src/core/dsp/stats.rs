//! Statistical helpers shared by the analysis stages

/// Arithmetic mean, 0 for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by n)
pub fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let var = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

/// Why a signal could not be z-scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Standard deviation is zero (constant or empty signal)
    ZeroVariance,
    /// NaN or infinity somewhere in the signal
    NonFinite,
}

/// Rescale to zero mean and unit standard deviation
pub fn z_score(data: &[f64]) -> Result<Vec<f64>, Degeneracy> {
    let m = mean(data);
    let sd = std_dev(data);
    if !m.is_finite() || !sd.is_finite() {
        return Err(Degeneracy::NonFinite);
    }
    // Relative to the mean so quiet bands keep their variation
    if sd <= f64::EPSILON * m.abs() {
        return Err(Degeneracy::ZeroVariance);
    }
    Ok(data.iter().map(|x| (x - m) / sd).collect())
}

/// Unbiased autocorrelation, one value per lag in `0..samples.len()`.
///
/// `r[k] = Σ x[j]·x[j+k] / (n - k)`
pub fn autocorrelation(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    (0..n)
        .map(|lag| {
            let sum: f64 = samples[..n - lag]
                .iter()
                .zip(&samples[lag..])
                .map(|(a, b)| a * b)
                .sum();
            sum / (n - lag) as f64
        })
        .collect()
}

/// Index of the first maximum; `None` for an empty slice
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in data.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Values below 1 become 0; the rest map to `log10(1 + v)`
pub fn log_compress(data: &mut [f64]) {
    for v in data.iter_mut() {
        *v = if *v < 1.0 { 0.0 } else { (1.0 + *v).log10() };
    }
}
