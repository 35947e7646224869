//! Error types for signal generation.

use thiserror::Error;

/// Errors that can occur while generating a signal.
///
/// All errors are fatal to the single generation request that raised them;
/// there is no partial output and nothing to retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignalError {
    /// The requested signal kind name is not one of the supported kinds.
    #[error("unknown signal kind: {0}")]
    InvalidSignalKind(String),

    /// A numeric parameter fails validation before any samples are produced.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// Normalization was asked to rescale a sequence with zero peak
    /// amplitude (empty, or constant after unbiasing). Rejected explicitly
    /// rather than letting a division produce NaN or infinity.
    #[error("cannot normalize a signal with zero peak amplitude")]
    DegenerateNormalization,
}
