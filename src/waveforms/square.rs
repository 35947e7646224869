//! Square wave implementation.

use std::f64::consts::TAU;

use crate::error::SignalError;
use crate::ops::unbias;
use crate::signal::Signal;

/// A square wave derived from the fractional cycle position.
///
/// The cycle fraction is recentered around zero by subtracting its mean,
/// then mapped through the sign function and scaled by the amplitude.
/// Output samples are exactly `±amp`, except at a sample that lands exactly
/// on the recentered zero crossing, which yields 0.
pub struct Square {
    freq: f64,
    amp: f64,
    offset: f64,
}

impl Square {
    pub fn new(freq: f64, amp: f64, offset: f64) -> Self {
        Self { freq, amp, offset }
    }
}

fn sign(y: f64) -> f64 {
    if y > 0.0 {
        1.0
    } else if y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Signal for Square {
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        let frac: Vec<f64> = ts
            .iter()
            .map(|t| {
                let cycle = self.freq * t + self.offset / TAU;
                cycle.fract()
            })
            .collect();
        Ok(unbias(&frac)
            .iter()
            .map(|f| self.amp * sign(*f))
            .collect())
    }
}
