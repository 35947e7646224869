//! Signal-kind dispatch and column generation.
//!
//! This module maps a signal-kind name plus parameters to a concrete
//! generator, produces the wave, and hands it back as a named column to be
//! merged into a caller-owned tabular frame.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SignalError;
use crate::noise::{BrownNoise, GaussianNoise, UniformNoise};
use crate::signal::Signal;
use crate::waveforms::{Impulse, Sinusoid, Square, Triangle};

/// Canonical registry of supported signal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Sinusoidal,
    Cosinusoidal,
    Triangle,
    Square,
    Impulse,
    UniformNoise,
    GaussianNoise,
    BrownNoise,
}

/// Complete registry of canonical kinds.
pub const ALL_SIGNAL_KINDS: &[SignalKind] = &[
    SignalKind::Sinusoidal,
    SignalKind::Cosinusoidal,
    SignalKind::Triangle,
    SignalKind::Square,
    SignalKind::Impulse,
    SignalKind::UniformNoise,
    SignalKind::GaussianNoise,
    SignalKind::BrownNoise,
];

impl SignalKind {
    /// Return the canonical string representation for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            SignalKind::Sinusoidal => "sinusoidal",
            SignalKind::Cosinusoidal => "cosinusoidal",
            SignalKind::Triangle => "triangle",
            SignalKind::Square => "square",
            SignalKind::Impulse => "impulse",
            SignalKind::UniformNoise => "uniform_noise",
            SignalKind::GaussianNoise => "gaussian_noise",
            SignalKind::BrownNoise => "brown_noise",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNAL_KINDS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SignalError::InvalidSignalKind(s.to_owned()))
    }
}

/// A generated wave labeled with its target column name.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Narrow interface to the caller-owned tabular frame.
///
/// The frame itself (indexing, persistence, other columns) stays the
/// caller's responsibility; generation only assigns one value sequence
/// under a column name.
pub trait Frame {
    /// Assigns `values` under `name`, replacing any existing column.
    fn set_column(&mut self, name: &str, values: Vec<f64>);
}

impl Frame for HashMap<String, Vec<f64>> {
    fn set_column(&mut self, name: &str, values: Vec<f64>) {
        self.insert(name.to_owned(), values);
    }
}

impl Frame for BTreeMap<String, Vec<f64>> {
    fn set_column(&mut self, name: &str, values: Vec<f64>) {
        self.insert(name.to_owned(), values);
    }
}

/// Parameters for one signal generation request.
///
/// A request is constructed with the required arguments and optional ones
/// at their defaults (amplitude 1.0, offset 0.0, duration 1.0, start 0.0),
/// then adjusted through the `with_*` setters or the public fields.
///
/// # Examples
///
/// ```
/// use siggen::{GenerateRequest, SignalKind};
///
/// let column = GenerateRequest::new("carrier", SignalKind::Sinusoidal, 1.0, 4.0)
///     .generate()
///     .unwrap();
/// assert_eq!(column.name, "carrier");
/// assert_eq!(column.values.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Target column name
    pub name: String,
    /// Signal kind to generate
    pub kind: SignalKind,
    /// Frequency in Hz (impulse count for `impulse`)
    pub frequency: f64,
    /// Peak amplitude (standard deviation for `gaussian_noise`)
    pub amplitude: f64,
    /// Phase offset in radians; ignored by noise kinds
    pub offset: f64,
    /// Sample rate in samples per second
    pub fs: f64,
    /// Window length in seconds
    pub duration: f64,
    /// Window start in seconds; ignored by noise kinds
    pub start: f64,
}

impl GenerateRequest {
    /// Creates a request with the required arguments and default optionals.
    pub fn new(name: impl Into<String>, kind: SignalKind, frequency: f64, fs: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            frequency,
            amplitude: 1.0,
            offset: 0.0,
            fs,
            duration: 1.0,
            start: 0.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Generates the wave using the thread-local random source.
    pub fn generate(&self) -> Result<Column, SignalError> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generates the wave drawing any randomness from `rng`.
    ///
    /// Deterministic kinds never touch the generator; passing a seeded
    /// `StdRng` makes the noise kinds reproducible.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Column, SignalError> {
        log::debug!(
            "generating `{}` signal for column `{}`",
            self.kind,
            self.name
        );
        let values = match self.kind {
            SignalKind::Sinusoidal => Sinusoid::new(self.frequency, self.amplitude, self.offset)
                .make_wave(self.duration, self.start, self.fs)?,
            SignalKind::Cosinusoidal => {
                Sinusoid::cosine(self.frequency, self.amplitude, self.offset)
                    .make_wave(self.duration, self.start, self.fs)?
            }
            SignalKind::Triangle => Triangle::new(self.frequency, self.amplitude, self.offset)
                .make_wave(self.duration, self.start, self.fs)?,
            SignalKind::Square => Square::new(self.frequency, self.amplitude, self.offset)
                .make_wave(self.duration, self.start, self.fs)?,
            SignalKind::Impulse => Impulse::new(self.frequency, self.amplitude)
                .make_wave(self.duration, self.start, self.fs)?,
            // Noise kinds use only duration, fs and amplitude
            SignalKind::UniformNoise => UniformNoise::with_rng(self.amplitude, &mut *rng)
                .make_wave(self.duration, 0.0, self.fs)?,
            SignalKind::GaussianNoise => GaussianNoise::with_rng(self.amplitude, &mut *rng)
                .make_wave(self.duration, 0.0, self.fs)?,
            SignalKind::BrownNoise => BrownNoise::with_rng(self.amplitude, &mut *rng)
                .make_wave(self.duration, 0.0, self.fs)?,
        };
        log::info!(
            "signal `{}` has been created ({} samples)",
            self.name,
            values.len()
        );
        Ok(Column {
            name: self.name.clone(),
            values,
        })
    }

    /// Generates the wave and merges it into `frame` under the column name.
    pub fn apply_to<F: Frame>(&self, frame: &mut F) -> Result<(), SignalError> {
        let column = self.generate()?;
        frame.set_column(&column.name, column.values);
        Ok(())
    }
}
