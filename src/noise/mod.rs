//! Noise process generators.
//!
//! This module contains the stochastic signal kinds. Each generator is
//! generic over its random source with a thread-local default; pass a
//! seeded generator through `with_rng` for reproducible output.

mod brown;
mod gaussian;
mod uniform;

pub use brown::BrownNoise;
pub use gaussian::GaussianNoise;
pub use uniform::UniformNoise;
