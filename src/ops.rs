//! Shared numeric post-processing for generated waves.
//!
//! Derived signal kinds (triangle, brown noise) produce raw values outside
//! the desired amplitude range or with nonzero mean; these helpers recenter
//! and rescale them.

use crate::error::SignalError;

/// Shifts a sequence so it has mean zero.
///
/// An empty input produces an empty output.
pub fn unbias(ys: &[f64]) -> Vec<f64> {
    if ys.is_empty() {
        return Vec::new();
    }
    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    ys.iter().map(|y| y - mean).collect()
}

/// Rescales a sequence so its peak absolute value equals `amp` exactly.
///
/// # Errors
///
/// Returns `SignalError::DegenerateNormalization` when the input is empty
/// or its peak absolute value is zero, since no rescaling can reach the
/// requested amplitude.
pub fn normalize(ys: &[f64], amp: f64) -> Result<Vec<f64>, SignalError> {
    let peak = ys.iter().fold(0.0_f64, |acc, y| acc.max(y.abs()));
    if peak == 0.0 {
        return Err(SignalError::DegenerateNormalization);
    }
    Ok(ys.iter().map(|y| amp * y / peak).collect())
}
