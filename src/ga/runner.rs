//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives [`Generation::advance`] until the configured
//! [`Convergence`] rule is satisfied and returns the best individual found.

use super::config::{Convergence, GaConfig};
use super::generation::Generation;
use super::types::{FitnessOracle, Individual};
use crate::error::Result;
use crate::random::create_rng;
use log::{debug, info, warn};
use rand::Rng;
use std::cmp::Ordering;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run.
    ///
    /// Empty if the population died out before any generation recorded one.
    pub best: Individual,

    /// Fitness of `best` when it was recorded, `0.0` if nothing was.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the final population is empty.
    pub extinct: bool,

    /// All-time best fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{Convergence, GaConfig, GaRunner, Individual};
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(7);
/// let population: Vec<Individual> = (0..20)
///     .map(|_| Individual::random(16, &mut rng))
///     .collect();
///
/// // Expected copies proportional to the share of set bits.
/// let oracle = |ind: &Individual, _pop: &[Individual], _i: usize| {
///     2.0 * ind.count_ones() as f64 / ind.len().max(1) as f64
/// };
///
/// let config = GaConfig::default()
///     .with_convergence(Convergence::Iterations(5))
///     .with_seed(42);
/// let result = GaRunner::run(&oracle, population, &config).unwrap();
/// assert_eq!(result.best.len(), 16);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from [`GaConfig::seed`] (or a random
    /// seed when unset).
    pub fn run<O>(oracle: &O, population: Vec<Individual>, config: &GaConfig) -> Result<GaResult>
    where
        O: FitnessOracle + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(oracle, population, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Fails before the first generation if the configuration is invalid.
    /// An extinct population keeps running as empty generations until the
    /// convergence rule stops it.
    pub fn run_with_rng<O, R>(
        oracle: &O,
        population: Vec<Individual>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult>
    where
        O: FitnessOracle + ?Sized,
        R: Rng,
    {
        config.validate()?;

        info!(
            "starting GA: encoding={} convergence={} population={} block_size={} \
             p_crossover={} p_mutate={} p_insert={} p_delete={}",
            config.encoding,
            config.convergence,
            population.len(),
            config.block_size,
            config.crossover_rate,
            config.mutation_rate,
            config.insertion_rate,
            config.deletion_rate,
        );

        let mut generation = Generation::new(population);
        let mut fitness_history = Vec::new();
        let mut extinction_logged = false;

        loop {
            generation.advance(oracle, config, rng);
            fitness_history.push(generation.best_fitness());
            oracle.on_generation(generation.number(), generation.best_fitness());

            debug!(
                "generation {}: population={} best={} improvement={}",
                generation.number(),
                generation.population().len(),
                generation.best_fitness(),
                generation.improvement(),
            );

            if generation.is_extinct() && !extinction_logged {
                warn!(
                    "population went extinct after {} generation(s)",
                    generation.number()
                );
                extinction_logged = true;
            }
            if is_converged(&generation, config.convergence) {
                break;
            }
        }

        let generations = generation.number();
        let extinct = generation.is_extinct();
        let best_fitness = generation.best_fitness();
        let best = generation.into_best().unwrap_or_default();

        info!(
            "GA finished after {generations} generation(s): best_fitness={best_fitness} length={}",
            best.len()
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            extinct,
            fitness_history,
        })
    }
}

/// Termination check, evaluated after every generation.
///
/// IMPROVEMENT keeps running only while the improvement strictly exceeds the
/// threshold, so a NaN on either side stops the run.
fn is_converged(generation: &Generation, convergence: Convergence) -> bool {
    match convergence {
        Convergence::Iterations(n) => generation.number() >= n,
        Convergence::Improvement(threshold) => {
            generation.improvement().partial_cmp(&threshold) != Some(Ordering::Greater)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
