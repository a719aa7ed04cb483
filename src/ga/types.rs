//! Core type definitions for the GA engine.
//!
//! [`Individual`] is the bit-string chromosome every operator works on, and
//! [`FitnessOracle`] is the contract between the engine and the caller's
//! scoring logic.

use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution: an ordered sequence of bits.
///
/// Bits are stored as `bool`, so every position is `0` or `1` by
/// construction. Operators clone individuals by value; no two population
/// slots share storage.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Individual;
///
/// let ind: Individual = "10110".parse().unwrap();
/// assert_eq!(ind.len(), 5);
/// assert_eq!(ind.count_ones(), 3);
/// assert_eq!(ind.to_string(), "10110");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    bits: Vec<bool>,
}

impl Individual {
    /// Creates an individual from its bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates an individual of `len` uniformly random bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the individual has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access to the bits. The length cannot change through it.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Consumes the individual and returns its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Appends a block of bits at the end.
    pub(crate) fn push_block(&mut self, block: impl IntoIterator<Item = bool>) {
        self.bits.extend(block);
    }

    /// Removes `size` bits starting at `start`.
    ///
    /// The range is clipped to the current length.
    pub(crate) fn remove_block(&mut self, start: usize, size: usize) {
        let len = self.bits.len();
        let start = start.min(len);
        let end = start.saturating_add(size).min(len);
        self.bits.drain(start..end);
    }
}

impl From<Vec<bool>> for Individual {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Individual {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Scores individuals for selection and best-tracking.
///
/// The oracle receives the whole population and the index of the individual
/// being scored, so fitness may be relative to the rest of the generation
/// (fitness sharing, tournaments). The returned value is used directly as
/// the expected number of copies in the next generation, so it must be
/// non-negative. Higher is better.
///
/// The engine calls [`fitness`](Self::fitness) once per individual during
/// selection and once more per individual of the new population during
/// best-tracking. Population size varies between generations.
///
/// Any closure `Fn(&Individual, &[Individual], usize) -> f64` is an oracle:
///
/// ```
/// use u_bitga::ga::{FitnessOracle, Individual};
///
/// let ones = |ind: &Individual, _pop: &[Individual], _i: usize| ind.count_ones() as f64;
/// let pop: Vec<Individual> = vec!["110".parse().unwrap()];
/// assert_eq!(ones.fitness(&pop[0], &pop, 0), 2.0);
/// ```
pub trait FitnessOracle {
    /// Returns the non-negative fitness of `population[index]`.
    ///
    /// `individual` is always `&population[index]`.
    fn fitness(&self, individual: &Individual, population: &[Individual], index: usize) -> f64;

    /// Called at the end of each generation with the all-time best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

impl<F> FitnessOracle for F
where
    F: Fn(&Individual, &[Individual], usize) -> f64,
{
    fn fitness(&self, individual: &Individual, population: &[Individual], index: usize) -> f64 {
        self(individual, population, index)
    }
}
