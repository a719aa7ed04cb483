//! Fitness-proportionate reproduction.
//!
//! Each individual's fitness is read as its expected number of copies in the
//! next generation: the integer part is copied unconditionally and the
//! fractional part decides one extra copy (stochastic rounding). The new
//! population size therefore follows the fitness values, not the old size.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3 (expected-value selection)
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"

use super::types::{FitnessOracle, Individual};
use rand::Rng;

/// Most copies one individual can receive from a single [`reproduce`] call.
const MAX_COPIES: usize = 1 << 16;

/// Builds the next population by expected-copy selection.
///
/// For each `population[i]` the oracle is called with `(individual,
/// population, i)`. A score of `f` yields `⌊f⌋` copies plus one more with
/// probability `f - ⌊f⌋`. Scores that are not strictly positive or not
/// finite (NaN, infinity) yield no copies. A score of `MAX_COPIES` (65536)
/// or more yields exactly that many copies.
///
/// # Complexity
/// O(n + m) where m is the output size
pub fn reproduce<O, R>(population: &[Individual], oracle: &O, rng: &mut R) -> Vec<Individual>
where
    O: FitnessOracle + ?Sized,
    R: Rng,
{
    let mut next = Vec::with_capacity(population.len());

    for (i, individual) in population.iter().enumerate() {
        let fitness = oracle.fitness(individual, population, i);
        if !fitness.is_finite() || fitness <= 0.0 {
            continue;
        }

        let guaranteed = fitness.floor();
        if guaranteed >= MAX_COPIES as f64 {
            next.extend((0..MAX_COPIES).map(|_| individual.clone()));
            continue;
        }
        let extra = fitness - guaranteed;

        for _ in 0..guaranteed as usize {
            next.push(individual.clone());
        }
        if rng.random::<f64>() < extra {
            next.push(individual.clone());
        }
    }

    next
}
