//! Uniform noise generator implementation.

use rand::Rng;

use crate::error::SignalError;
use crate::signal::Signal;

/// Uniform white noise.
///
/// Each sample is drawn independently from a uniform distribution over
/// `[-amp, amp]`. Only the number of requested time points matters; the
/// time values themselves are ignored.
pub struct UniformNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Peak amplitude
    amp: f64,
    /// Random number generator
    rng: R,
}

impl UniformNoise<rand::rngs::ThreadRng> {
    /// Creates a uniform noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use siggen::{Signal, UniformNoise};
    ///
    /// let mut noise = UniformNoise::new(2.0);
    /// let wave = noise.make_wave(1.0, 0.0, 100.0).unwrap();
    /// assert!(wave.iter().all(|y| y.abs() <= 2.0));
    /// ```
    pub fn new(amp: f64) -> Self {
        Self {
            amp,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> UniformNoise<R> {
    /// Creates a uniform noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use siggen::{Signal, UniformNoise};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = UniformNoise::with_rng(1.0, rng);
    /// let wave = noise.make_wave(1.0, 0.0, 100.0).unwrap();
    /// ```
    pub fn with_rng(amp: f64, rng: R) -> Self {
        Self { amp, rng }
    }
}

impl<R: Rng> Signal for UniformNoise<R> {
    fn evaluate(&mut self, ts: &[f64]) -> Result<Vec<f64>, SignalError> {
        Ok(ts
            .iter()
            .map(|_| self.amp * self.rng.gen_range(-1.0..=1.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_bounds() {
        let mut noise = UniformNoise::with_rng(2.0, StdRng::seed_from_u64(1));
        let wave = noise.make_wave(10.0, 0.0, 1000.0).unwrap();
        for y in &wave {
            assert!(y.abs() <= 2.0);
        }
    }

    #[test]
    fn test_length() {
        let mut noise = UniformNoise::new(1.0);
        let wave = noise.make_wave(0.5, 0.0, 250.0).unwrap();
        assert_eq!(wave.len(), 125);
    }

    #[test]
    fn test_randomness() {
        let mut noise = UniformNoise::with_rng(1.0, StdRng::seed_from_u64(2));
        let wave = noise.make_wave(1.0, 0.0, 100.0).unwrap();
        let first = wave[0];
        assert!(!wave.iter().all(|y| *y == first));
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut a = UniformNoise::with_rng(1.0, StdRng::seed_from_u64(7));
        let mut b = UniformNoise::with_rng(1.0, StdRng::seed_from_u64(7));
        assert_eq!(
            a.make_wave(1.0, 0.0, 64.0).unwrap(),
            b.make_wave(1.0, 0.0, 64.0).unwrap()
        );
    }
}
