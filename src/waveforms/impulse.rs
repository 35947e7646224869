//! Impulse train implementation.

use crate::error::SignalError;
use crate::signal::{Signal, time_vector};

/// A train of `freq` impulses spaced evenly across the generated window.
///
/// Impulse placement depends on the window itself, not on individual time
/// points: locations are `start + k * duration / freq` for `k = 0, 1, …`
/// while they remain inside `[start, start + duration)`. Each location is
/// snapped to the first sample at or after it by binary search; all other
/// samples are zero. When two locations snap to the same sample, the later
/// write wins.
pub struct Impulse {
    freq: f64,
    amp: f64,
}

impl Impulse {
    /// Creates an impulse train.
    ///
    /// # Arguments
    ///
    /// * `freq` - Number of impulses across the window; must be positive
    /// * `amp` - Value written at each impulse sample
    pub fn new(freq: f64, amp: f64) -> Self {
        Self { freq, amp }
    }

    /// Places impulses over an already discretized window.
    ///
    /// `ts` must be the sorted time vector for `[start, start + duration)`.
    fn place(&self, ts: &[f64], start: f64, duration: f64) -> Result<Vec<f64>, SignalError> {
        if !(self.freq > 0.0) || !self.freq.is_finite() {
            return Err(SignalError::InvalidParameter {
                name: "frequency",
                reason: "impulse count must be positive and finite",
            });
        }
        let mut ys = vec![0.0; ts.len()];
        let spacing = duration / self.freq;
        let end = start + duration;
        let mut k = 0u64;
        loop {
            let loc = start + k as f64 * spacing;
            if loc >= end {
                break;
            }
            let idx = ts.partition_point(|&t| t < loc);
            if idx < ys.len() {
                ys[idx] = self.amp;
            }
            k += 1;
        }
        Ok(ys)
    }
}

impl Signal for Impulse {
    /// Derives the window geometry from the time vector itself: start is the
    /// first sample and duration spans `n` uniform steps. Windows of fewer
    /// than two samples carry no usable geometry and evaluate to all zeros.
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        if ts.len() < 2 {
            return self.place(ts, 0.0, 0.0);
        }
        let start = ts[0];
        let dt = ts[1] - ts[0];
        self.place(ts, start, ts.len() as f64 * dt)
    }

    /// Uses the exact window parameters instead of reconstructing them from
    /// the time vector, so impulse locations carry no rounding drift.
    fn make_wave(&mut self, duration: f64, start: f64, fs: f64) -> Result<Vec<f64>, SignalError> {
        let ts = time_vector(duration, start, fs)?;
        self.place(&ts, start, duration)
    }
}
