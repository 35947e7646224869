//! Core signal trait and time-vector discretization.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any waveform that can be evaluated over a sequence of time points,
//! plus the discretizer that turns a (duration, start, sample rate)
//! window into that sequence.

use crate::error::SignalError;

/// Common interface for all signal generators.
///
/// A signal is evaluated as a function of a sequence of time values.
/// The trait provides two operations:
/// - `evaluate()` computes samples at arbitrary time points
/// - `make_wave()` discretizes a time window and evaluates over it
pub trait Signal {
    /// Evaluates the signal at the given times.
    ///
    /// The output has one sample per entry of `ts`. Deterministic kinds are
    /// pure functions of the time values; noise kinds use only the length
    /// and take `&mut self` for their random source.
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError>;

    /// Produces a wave over a discretized time window.
    ///
    /// # Arguments
    ///
    /// * `duration` - Window length in seconds
    /// * `start` - Start time of the window in seconds
    /// * `fs` - Sample rate in samples per second
    ///
    /// # Examples
    ///
    /// ```
    /// use siggen::{Signal, Sinusoid};
    ///
    /// let mut signal = Sinusoid::new(440.0, 1.0, 0.0);
    /// let wave = signal.make_wave(1.0, 0.0, 125.0).unwrap();
    /// assert_eq!(wave.len(), 125);
    /// ```
    fn make_wave(&mut self, duration: f64, start: f64, fs: f64) -> Result<Vec<f64>, SignalError> {
        let ts = time_vector(duration, start, fs)?;
        self.evaluate(&ts)
    }
}

/// Discretizes a time window into an ordered sequence of timestamps.
///
/// Produces `n = round(duration * fs)` timestamps `start + i / fs` for
/// `i` in `0..n`. Rounding is `f64::round`, i.e. half-away-from-zero;
/// callers should not rely on wave length at exact `.5` boundaries.
///
/// # Errors
///
/// Returns `SignalError::InvalidParameter` when `fs` is not positive or
/// `duration` is negative (NaN fails the same comparisons).
pub fn time_vector(duration: f64, start: f64, fs: f64) -> Result<Vec<f64>, SignalError> {
    if !(fs > 0.0) {
        return Err(SignalError::InvalidParameter {
            name: "fs",
            reason: "sample rate must be positive",
        });
    }
    if !(duration >= 0.0) {
        return Err(SignalError::InvalidParameter {
            name: "duration",
            reason: "duration must not be negative",
        });
    }
    let n = (duration * fs).round() as usize;
    Ok((0..n).map(|i| start + i as f64 / fs).collect())
}
