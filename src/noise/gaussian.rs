//! Gaussian noise generator implementation.

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::SignalError;
use crate::signal::Signal;

/// Gaussian white noise.
///
/// Each sample is drawn independently from a normal distribution with mean
/// zero and standard deviation `amp`, using the Box-Muller transform over
/// uniform draws.
pub struct GaussianNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Standard deviation of the samples
    amp: f64,
    /// Random number generator
    rng: R,
}

impl GaussianNoise<rand::rngs::ThreadRng> {
    /// Creates a gaussian noise generator with the default ThreadRng.
    pub fn new(amp: f64) -> Self {
        Self {
            amp,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Creates a gaussian noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use siggen::{GaussianNoise, Signal};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = GaussianNoise::with_rng(1.0, rng);
    /// let wave = noise.make_wave(1.0, 0.0, 100.0).unwrap();
    /// assert_eq!(wave.len(), 100);
    /// ```
    pub fn with_rng(amp: f64, rng: R) -> Self {
        Self { amp, rng }
    }

    fn standard_normal(&mut self) -> f64 {
        // Box-Muller transform; 1 - u keeps the logarithm away from ln(0)
        let u1: f64 = 1.0 - self.rng.gen_range(0.0..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

impl<R: Rng> Signal for GaussianNoise<R> {
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        Ok(ts.iter().map(|_| self.amp * self.standard_normal()).collect())
    }
}
