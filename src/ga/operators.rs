//! Bit-string genetic operators.
//!
//! Each operator takes the population by value and returns the transformed
//! population. Individuals keep their slots; only the structural operators
//! change lengths.
//!
//! # Operators
//!
//! - [`crossover`]: random pairing + two-point segment swap
//! - [`mutate`]: independent per-bit flips
//! - [`insert`]: append a random block (VSLC only)
//! - [`delete`]: remove one aligned block (VSLC only)
//!
//! Probabilities are read from a validated [`GaConfig`]; a rate outside
//! `[0, 1]` panics in the RNG.
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (two-point crossover)
//! - Harvey (1992), "Species Adaptation Genetic Algorithms: A Basis for a
//!   Continuing SAGA" (variable-length genotypes)

use super::config::GaConfig;
use super::types::Individual;
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Two-point crossover over a randomly selected mating pool.
///
/// # Algorithm
///
/// 1. Each slot joins the pool independently with probability
///    `config.crossover_rate`
/// 2. The pool is drawn two at a time, uniformly without replacement, until
///    fewer than two remain; an odd leftover is not crossed
/// 3. Each pair swaps the segment `[c1, c2)` where `c1 < c2` are distinct
///    cut points drawn from `0..min(len_a, len_b)`
///
/// Offspring replace their parents in the same slots. Flanks and the tail
/// of the longer parent are untouched.
///
/// # Complexity
/// O(n + Σ segment lengths)
///
/// # Panics
/// Panics if `config.crossover_rate` is outside `[0, 1]`.
pub fn crossover<R: Rng>(
    mut population: Vec<Individual>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mut pool: Vec<usize> = (0..population.len())
        .filter(|_| rng.random_bool(config.crossover_rate))
        .collect();
    pool.shuffle(rng);

    for pair in pool.chunks_exact(2) {
        let (a, b) = slot_pair(&mut population, pair[0], pair[1]);
        two_point_swap(a, b, rng);
    }

    population
}

/// Swaps the bits in `[c1, c2)` between `a` and `b`.
///
/// Leaves both unchanged when their common length is below two, since no
/// pair of distinct cut points exists.
pub fn two_point_swap<R: Rng>(a: &mut Individual, b: &mut Individual, rng: &mut R) {
    let len = a.len().min(b.len());
    if len < 2 {
        return;
    }

    let (c1, c2) = distinct_cuts(len, rng);
    a.bits_mut()[c1..c2].swap_with_slice(&mut b.bits_mut()[c1..c2]);
}

/// Mutable references to two distinct slots.
fn slot_pair(
    population: &mut [Individual],
    i: usize,
    j: usize,
) -> (&mut Individual, &mut Individual) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = population.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = population.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Two distinct cut points in `0..len`, ordered. Requires `len >= 2`.
fn distinct_cuts<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let c1 = rng.random_range(0..len);
    // Draw from the remaining len - 1 positions and skip over c1.
    let mut c2 = rng.random_range(0..len - 1);
    if c2 >= c1 {
        c2 += 1;
    }
    if c1 < c2 {
        (c1, c2)
    } else {
        (c2, c1)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips every bit independently with probability `config.mutation_rate`.
///
/// # Complexity
/// O(total bits)
///
/// # Panics
/// Panics if `config.mutation_rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(
    mut population: Vec<Individual>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    for individual in &mut population {
        for bit in individual.bits_mut() {
            if rng.random_bool(config.mutation_rate) {
                *bit = !*bit;
            }
        }
    }
    population
}

// ============================================================================
// Structural operators (VSLC)
// ============================================================================

/// Appends `config.block_size` random bits to each individual with
/// probability `config.insertion_rate`.
///
/// # Panics
/// Panics if `config.insertion_rate` is outside `[0, 1]`.
pub fn insert<R: Rng>(
    mut population: Vec<Individual>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let size = config.block_size;
    for individual in &mut population {
        if rng.random_bool(config.insertion_rate) {
            let block: Vec<bool> = (0..size).map(|_| rng.random_bool(0.5)).collect();
            individual.push_block(block);
        }
    }
    population
}

/// Removes one block of `config.block_size` bits from each individual with
/// probability `config.deletion_rate`.
///
/// The block is chosen uniformly among the `len / block_size` whole blocks
/// and removed from offset `block * block_size`. Individuals shorter than
/// one block are left as they are.
///
/// # Panics
/// Panics if `config.deletion_rate` is outside `[0, 1]`.
pub fn delete<R: Rng>(
    mut population: Vec<Individual>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let size = config.block_size;
    for individual in &mut population {
        if !rng.random_bool(config.deletion_rate) {
            continue;
        }
        let blocks = if size == 0 { 0 } else { individual.len() / size };
        if blocks == 0 {
            continue;
        }
        let block = rng.random_range(0..blocks);
        individual.remove_block(block * size, size);
    }
    population
}

// ============================================================================
// Tests
// ============================================================================
