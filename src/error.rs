//! Error types for the GA engine.
//!
//! Every error is raised before the first generation runs.

use thiserror::Error;

/// Errors returned by configuration, parsing, and [`GaRunner`](crate::ga::GaRunner).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Convergence mode name is not `ITERATIONS` or `IMPROVEMENT`.
    #[error("invalid convergence type {0:?}: must be \"ITERATIONS\" or \"IMPROVEMENT\"")]
    InvalidConvergenceMode(String),

    /// `ITERATIONS` convergence with a value below one.
    #[error("invalid convergence value {0}: must run at least 1 iteration")]
    InvalidIterations(f64),

    /// Encoding name is not `FSLC` or `VSLC`.
    #[error("invalid encoding {0:?}: must be \"FSLC\" or \"VSLC\"")]
    InvalidEncoding(String),

    /// VSLC encoding without a block size.
    #[error("block_size must be at least 1 for VSLC encoding")]
    InvalidBlockSize,

    /// A probability outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A character other than `0` or `1` in a bit string.
    #[error("invalid bit {0:?}: expected '0' or '1'")]
    InvalidBit(char),
}

/// Result alias for GA operations.
pub type Result<T> = std::result::Result<T, GaError>;
