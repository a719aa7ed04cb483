//! Generation state and the per-generation operator pipeline.

use super::config::GaConfig;
use super::operators::{crossover, delete, insert, mutate};
use super::selection::reproduce;
use super::types::{FitnessOracle, Individual};
use rand::Rng;

/// State carried from one generation to the next.
///
/// Holds the current population and the best individual seen in any
/// generation so far. The best is a value snapshot: later operators never
/// touch it.
#[derive(Debug, Clone)]
pub struct Generation {
    population: Vec<Individual>,
    best: Option<Individual>,
    best_fitness: f64,
    improvement: f64,
    number: usize,
}

impl Generation {
    /// Starts a run from its initial population.
    ///
    /// No best is recorded yet; the baseline best fitness is `0.0`.
    pub fn new(population: Vec<Individual>) -> Self {
        Self {
            population,
            best: None,
            best_fitness: 0.0,
            improvement: 0.0,
            number: 0,
        }
    }

    /// The current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The best individual of all generations so far.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Fitness of [`best`](Self::best), or `0.0` before the first generation.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// This generation's best fitness minus the all-time best before it.
    ///
    /// May be negative. Negative infinity after an extinct generation.
    pub fn improvement(&self) -> f64 {
        self.improvement
    }

    /// Number of generations executed.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns `true` if the population has died out.
    pub fn is_extinct(&self) -> bool {
        self.population.is_empty()
    }

    /// Consumes the state and returns the all-time best individual.
    pub fn into_best(self) -> Option<Individual> {
        self.best
    }

    /// Runs one generation.
    ///
    /// ```text
    /// reproduce → crossover → mutate → [insert → delete]  (VSLC only)
    /// ```
    ///
    /// The new population is then scored once per individual to find this
    /// generation's best (the first maximum wins ties). The all-time best is
    /// replaced only when this generation's best is strictly fitter.
    pub fn advance<O, R>(&mut self, oracle: &O, config: &GaConfig, rng: &mut R)
    where
        O: FitnessOracle + ?Sized,
        R: Rng,
    {
        let population = std::mem::take(&mut self.population);
        let population = reproduce(&population, oracle, rng);
        let population = crossover(population, config, rng);
        let mut population = mutate(population, config, rng);

        if config.encoding.is_variable() {
            population = insert(population, config, rng);
            population = delete(population, config, rng);
        }

        self.number += 1;

        match find_best(&population, oracle) {
            Some((index, fitness)) => {
                self.improvement = fitness - self.best_fitness;
                if self.best.is_none() || fitness > self.best_fitness {
                    self.best = Some(population[index].clone());
                    self.best_fitness = fitness;
                }
            }
            None => self.improvement = f64::NEG_INFINITY,
        }

        self.population = population;
    }
}

/// Index and fitness of the fittest individual, first one on ties.
fn find_best<O>(population: &[Individual], oracle: &O) -> Option<(usize, f64)>
where
    O: FitnessOracle + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, individual) in population.iter().enumerate() {
        let fitness = oracle.fitness(individual, population, i);
        if best.map_or(true, |(_, current)| fitness > current) {
            best = Some((i, fitness));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Encoding, GaConfig};
    use crate::random::create_rng;
    use std::cell::Cell;

    fn ones(ind: &Individual, _pop: &[Individual], _i: usize) -> f64 {
        ind.count_ones() as f64
    }

    fn random_population(n: usize, len: usize, seed: u64) -> Vec<Individual> {
        let mut rng = create_rng(seed);
        (0..n).map(|_| Individual::random(len, &mut rng)).collect()
    }

    #[test]
    fn test_new_generation_is_empty() {
        let generation = Generation::new(random_population(4, 8, 1));
        assert!(generation.best().is_none());
        assert_eq!(generation.best_fitness(), 0.0);
        assert_eq!(generation.number(), 0);
        assert_eq!(generation.population().len(), 4);
    }

    #[test]
    fn test_find_best_first_on_ties() {
        let pop: Vec<Individual> = ["0110", "1100", "0001", "1010"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(find_best(&pop, &ones), Some((0, 2.0)));
        assert_eq!(find_best(&[], &ones), None);
    }

    #[test]
    fn test_advance_records_best() {
        let config = GaConfig::default();
        let mut rng = create_rng(42);
        let constant = |_: &Individual, _: &[Individual], _: usize| 1.0;

        let mut generation = Generation::new(random_population(4, 8, 2));
        generation.advance(&constant, &config, &mut rng);

        assert_eq!(generation.number(), 1);
        assert_eq!(generation.population().len(), 4);
        assert_eq!(generation.best_fitness(), 1.0);
        assert_eq!(generation.improvement(), 1.0);
        assert_eq!(generation.best(), Some(&generation.population()[0]));
    }

    #[test]
    fn test_best_fitness_non_decreasing() {
        let config = GaConfig::default().with_mutation_rate(0.2);
        let mut rng = create_rng(42);
        // At least one copy each, so the population never dies, and at most
        // 1.1 copies so it grows slowly.
        let oracle = |ind: &Individual, _: &[Individual], _: usize| {
            1.0 + ind.count_ones() as f64 / 160.0
        };

        let mut generation = Generation::new(random_population(30, 16, 3));
        let mut previous = generation.best_fitness();
        for _ in 0..30 {
            generation.advance(&oracle, &config, &mut rng);
            assert!(!generation.is_extinct());
            assert!(generation.best_fitness() >= previous);
            previous = generation.best_fitness();
        }
    }

    #[test]
    fn test_best_is_snapshot_not_current_slot() {
        // Full mutation flips every bit after the best was recorded, so the
        // all-time best must survive as its own copy. Integer fitness keeps
        // selection deterministic.
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0);
        let mut rng = create_rng(42);
        let full_scores_two = |ind: &Individual, _: &[Individual], _: usize| {
            if ind.count_ones() == ind.len() {
                2.0
            } else {
                1.0
            }
        };
        let mut generation = Generation::new(vec!["1111".parse().unwrap()]);

        // "1111" x2 after selection, "0000" x2 after mutation.
        generation.advance(&full_scores_two, &config, &mut rng);
        assert_eq!(generation.best().unwrap().to_string(), "0000");
        assert_eq!(generation.best_fitness(), 1.0);

        // "0000" x2 → "1111" x2: strictly better.
        generation.advance(&full_scores_two, &config, &mut rng);
        assert_eq!(generation.best().unwrap().to_string(), "1111");
        assert_eq!(generation.best_fitness(), 2.0);
        assert_eq!(generation.improvement(), 1.0);

        // "1111" x4 → "0000" x4: worse, best stays "1111".
        generation.advance(&full_scores_two, &config, &mut rng);
        assert_eq!(generation.population().len(), 4);
        assert_eq!(generation.population()[0].to_string(), "0000");
        assert_eq!(generation.best().unwrap().to_string(), "1111");
        assert_eq!(generation.best_fitness(), 2.0);
        assert_eq!(generation.improvement(), -1.0);
    }

    #[test]
    fn test_extinct_generation() {
        let config = GaConfig::default();
        let mut rng = create_rng(42);
        let zero = |_: &Individual, _: &[Individual], _: usize| 0.0;

        let mut generation = Generation::new(random_population(4, 8, 4));
        generation.advance(&zero, &config, &mut rng);

        assert!(generation.is_extinct());
        assert!(generation.best().is_none());
        assert_eq!(generation.improvement(), f64::NEG_INFINITY);
        assert_eq!(generation.number(), 1);
    }

    #[test]
    fn test_fslc_keeps_lengths() {
        let config = GaConfig::default()
            .with_insertion_rate(1.0)
            .with_deletion_rate(1.0);
        let mut rng = create_rng(42);
        let constant = |_: &Individual, _: &[Individual], _: usize| 1.0;

        let mut generation = Generation::new(random_population(6, 10, 5));
        for _ in 0..5 {
            generation.advance(&constant, &config, &mut rng);
        }
        assert!(generation.population().iter().all(|i| i.len() == 10));
    }

    #[test]
    fn test_vslc_changes_length_by_blocks() {
        let config = GaConfig::default()
            .with_encoding(Encoding::Vslc)
            .with_block_size(3)
            .with_insertion_rate(0.5)
            .with_deletion_rate(0.5);
        let mut rng = create_rng(42);
        let constant = |_: &Individual, _: &[Individual], _: usize| 1.0;

        let mut generation = Generation::new(random_population(20, 12, 6));
        for _ in 0..10 {
            generation.advance(&constant, &config, &mut rng);
            for ind in generation.population() {
                assert_eq!(ind.len() % 3, 0, "length {} not a block multiple", ind.len());
            }
        }
    }

    #[test]
    fn test_oracle_call_count() {
        struct Counter(Cell<usize>);
        impl FitnessOracle for Counter {
            fn fitness(&self, _: &Individual, _: &[Individual], _: usize) -> f64 {
                self.0.set(self.0.get() + 1);
                1.0
            }
        }

        let config = GaConfig::default();
        let mut rng = create_rng(42);
        let counter = Counter(Cell::new(0));

        let mut generation = Generation::new(random_population(7, 8, 7));
        generation.advance(&counter, &config, &mut rng);

        // Once for selection, once for best-tracking.
        assert_eq!(counter.0.get(), 14);
    }
}
