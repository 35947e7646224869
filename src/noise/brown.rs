//! Brown noise generator implementation.

use rand::Rng;

use crate::error::SignalError;
use crate::ops::{normalize, unbias};
use crate::signal::Signal;

/// Brown (red) noise.
///
/// Produced by integrating uniform increments: `n` i.i.d. draws over
/// `[-1, 1]` are cumulatively summed, then the running sum is unbiased to
/// zero mean and normalized so the peak magnitude equals `amp` exactly.
pub struct BrownNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Peak amplitude after normalization
    amp: f64,
    /// Random number generator
    rng: R,
}

impl BrownNoise<rand::rngs::ThreadRng> {
    /// Creates a brown noise generator with the default ThreadRng.
    pub fn new(amp: f64) -> Self {
        Self {
            amp,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> BrownNoise<R> {
    /// Creates a brown noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use siggen::{BrownNoise, Signal};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = BrownNoise::with_rng(1.0, rng);
    /// let wave = noise.make_wave(1.0, 0.0, 100.0).unwrap();
    /// let peak = wave.iter().fold(0.0_f64, |acc, y| acc.max(y.abs()));
    /// assert!((peak - 1.0).abs() < 1e-12);
    /// ```
    pub fn with_rng(amp: f64, rng: R) -> Self {
        Self { amp, rng }
    }
}

impl<R: Rng> Signal for BrownNoise<R> {
    /// Normalization needs at least two distinct samples; a single-sample
    /// window fails with `DegenerateNormalization`.
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        if ts.is_empty() {
            return Ok(Vec::new());
        }
        let mut acc = 0.0;
        let cumsum: Vec<f64> = ts
            .iter()
            .map(|_| {
                acc += self.rng.gen_range(-1.0..=1.0);
                acc
            })
            .collect();
        normalize(&unbias(&cumsum), self.amp)
    }
}
