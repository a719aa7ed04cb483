//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run: chromosome encoding,
//! convergence rule, block size for the structural operators, and the four
//! operator probabilities. It is immutable once the run starts and is passed
//! by reference to every operator.

use crate::error::{GaError, Result};
use std::fmt;
use std::str::FromStr;

/// Chromosome encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Fixed-String-Length Chromosome: lengths never change.
    #[default]
    Fslc,

    /// Variable-String-Length Chromosome: insertion and deletion grow and
    /// shrink individuals one block at a time.
    Vslc,
}

impl Encoding {
    /// Returns `true` if the structural operators run under this encoding.
    pub fn is_variable(self) -> bool {
        matches!(self, Encoding::Vslc)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Fslc => "FSLC",
            Encoding::Vslc => "VSLC",
        })
    }
}

impl FromStr for Encoding {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FSLC" => Ok(Encoding::Fslc),
            "VSLC" => Ok(Encoding::Vslc),
            other => Err(GaError::InvalidEncoding(other.to_string())),
        }
    }
}

/// Termination rule for the evolutionary loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convergence {
    /// Run exactly this many generations. Must be at least 1.
    Iterations(usize),

    /// Run at least one generation, then keep going while the latest
    /// improvement in best fitness is strictly greater than this floor.
    Improvement(f64),
}

impl Default for Convergence {
    fn default() -> Self {
        Convergence::Iterations(100)
    }
}

impl Convergence {
    /// Builds a convergence rule from a mode name and its numeric value.
    ///
    /// `mode` must be `"ITERATIONS"` or `"IMPROVEMENT"`. For `ITERATIONS`
    /// the value must be at least 1; a fractional count is rounded up, so
    /// `2.5` runs three generations.
    ///
    /// ```
    /// use u_bitga::ga::Convergence;
    ///
    /// assert_eq!(Convergence::parse("ITERATIONS", 5.0).unwrap(), Convergence::Iterations(5));
    /// assert!(Convergence::parse("ITERATIONS", 0.0).is_err());
    /// assert!(Convergence::parse("BOGUS", 5.0).is_err());
    /// ```
    pub fn parse(mode: &str, value: f64) -> Result<Self> {
        match mode {
            "ITERATIONS" => {
                if value.is_nan() || value < 1.0 {
                    return Err(GaError::InvalidIterations(value));
                }
                Ok(Convergence::Iterations(value.ceil() as usize))
            }
            "IMPROVEMENT" => Ok(Convergence::Improvement(value)),
            other => Err(GaError::InvalidConvergenceMode(other.to_string())),
        }
    }
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convergence::Iterations(n) => write!(f, "ITERATIONS({n})"),
            Convergence::Improvement(t) => write!(f, "IMPROVEMENT({t})"),
        }
    }
}

/// Configuration for a GA run.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{Convergence, Encoding, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.encoding, Encoding::Fslc);
/// assert_eq!(config.convergence, Convergence::Iterations(100));
/// assert_eq!(config.crossover_rate, 0.6);
/// assert_eq!(config.mutation_rate, 0.05);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Convergence, Encoding, GaConfig};
///
/// let config = GaConfig::default()
///     .with_encoding(Encoding::Vslc)
///     .with_block_size(4)
///     .with_convergence(Convergence::Improvement(0.01))
///     .with_insertion_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Chromosome encoding.
    pub encoding: Encoding,

    /// Termination rule.
    pub convergence: Convergence,

    /// Number of bits added by insertion and removed by deletion.
    ///
    /// Required (at least 1) for [`Encoding::Vslc`], ignored for FSLC.
    pub block_size: usize,

    /// Probability that a population slot joins the crossover pool (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-individual probability of appending a random block (0.0–1.0).
    pub insertion_rate: f64,

    /// Per-individual probability of removing one block (0.0–1.0).
    pub deletion_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            convergence: Convergence::default(),
            block_size: 0,
            crossover_rate: 0.6,
            mutation_rate: 0.05,
            insertion_rate: 0.001,
            deletion_rate: 0.001,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the chromosome encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the convergence rule.
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    /// Sets the block size for insertion and deletion.
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the insertion rate.
    pub fn with_insertion_rate(mut self, rate: f64) -> Self {
        self.insertion_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the deletion rate.
    pub fn with_deletion_rate(mut self, rate: f64) -> Self {
        self.deletion_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`GaRunner::run`](super::GaRunner::run) before the first
    /// generation.
    pub fn validate(&self) -> Result<()> {
        if let Convergence::Iterations(n) = self.convergence {
            if n == 0 {
                return Err(GaError::InvalidIterations(0.0));
            }
        }
        if self.encoding.is_variable() && self.block_size == 0 {
            return Err(GaError::InvalidBlockSize);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("insertion_rate", self.insertion_rate),
            ("deletion_rate", self.deletion_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GaError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
