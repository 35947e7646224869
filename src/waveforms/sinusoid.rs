//! Sinusoidal signal implementation.

use std::f64::consts::TAU;

use crate::error::SignalError;
use crate::signal::Signal;

/// A sinusoidal signal with a selectable periodic base function.
///
/// Evaluates `amp * func(2π · freq · t + offset)` at each time point,
/// where `func` is sine or cosine. The evaluation is a pure function of
/// the time values; any finite frequency is accepted, including zero
/// (constant output) and negative values (phase-reversed output).
pub struct Sinusoid {
    /// Frequency in Hz
    freq: f64,
    /// Peak amplitude
    amp: f64,
    /// Phase offset in radians
    offset: f64,
    /// Periodic base function applied to the phase
    func: fn(f64) -> f64,
}

impl Sinusoid {
    /// Creates a sine-based sinusoid.
    ///
    /// # Arguments
    ///
    /// * `freq` - Frequency in Hz
    /// * `amp` - Peak amplitude
    /// * `offset` - Phase offset in radians
    ///
    /// # Examples
    ///
    /// ```
    /// use siggen::{Signal, Sinusoid};
    ///
    /// let mut signal = Sinusoid::new(1.0, 1.0, 0.0);
    /// let wave = signal.make_wave(1.0, 0.0, 4.0).unwrap();
    /// assert!(wave[0].abs() < 1e-12);
    /// assert!((wave[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(freq: f64, amp: f64, offset: f64) -> Self {
        Self {
            freq,
            amp,
            offset,
            func: f64::sin,
        }
    }

    /// Creates a cosine-based sinusoid.
    pub fn cosine(freq: f64, amp: f64, offset: f64) -> Self {
        Self {
            freq,
            amp,
            offset,
            func: f64::cos,
        }
    }
}

impl Signal for Sinusoid {
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        Ok(ts
            .iter()
            .map(|t| self.amp * (self.func)(TAU * self.freq * t + self.offset))
            .collect())
    }
}
