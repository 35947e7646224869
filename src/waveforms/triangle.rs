//! Triangle wave implementation.

use std::f64::consts::TAU;

use crate::error::SignalError;
use crate::ops::{normalize, unbias};
use crate::signal::Signal;

/// A triangle wave derived from the fractional cycle position.
///
/// The raw shape is `|frac - 0.5|` where `frac` is the fractional part of
/// `freq * t + offset / 2π` (truncated toward zero, so it keeps the sign of
/// the cycle position). The raw values are unbiased to zero mean and then
/// normalized so the peak equals `amp` exactly.
pub struct Triangle {
    freq: f64,
    amp: f64,
    offset: f64,
}

impl Triangle {
    /// Creates a triangle wave.
    ///
    /// # Arguments
    ///
    /// * `freq` - Frequency in Hz
    /// * `amp` - Peak amplitude after normalization
    /// * `offset` - Phase offset in radians
    pub fn new(freq: f64, amp: f64, offset: f64) -> Self {
        Self { freq, amp, offset }
    }
}

impl Signal for Triangle {
    /// Normalization needs at least two distinct samples; a single-sample
    /// window fails with `DegenerateNormalization`.
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        if ts.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<f64> = ts
            .iter()
            .map(|t| {
                let cycle = self.freq * t + self.offset / TAU;
                (cycle.fract() - 0.5).abs()
            })
            .collect();
        normalize(&unbias(&raw), self.amp)
    }
}
