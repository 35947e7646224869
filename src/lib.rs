//! Siggen - synthetic time-series signal generation.
//!
//! This library evaluates periodic waveforms and noise processes over a
//! discretized time window and produces named columns for tabular
//! time-series frames.

pub mod error;
pub mod generate;
pub mod noise;
pub mod ops;
pub mod signal;
pub mod waveforms;

// Re-export commonly used types at the crate root
pub use error::SignalError;
pub use generate::{Column, Frame, GenerateRequest, SignalKind};
pub use noise::{BrownNoise, GaussianNoise, UniformNoise};
pub use ops::{normalize, unbias};
pub use signal::{Signal, time_vector};
pub use waveforms::{Impulse, Sinusoid, Square, Triangle};
