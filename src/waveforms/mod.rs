//! Periodic waveform generators.
//!
//! This module contains the deterministic signal kinds: sinusoids and the
//! waveforms derived from the fractional cycle position.

mod impulse;
mod sinusoid;
mod square;
mod triangle;

pub use impulse::Impulse;
pub use sinusoid::Sinusoid;
pub use square::Square;
pub use triangle::Triangle;
