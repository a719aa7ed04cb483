//! Bit-string genetic algorithm engine.
//!
//! Given a fitness oracle and an initial population of bit strings,
//! [`ga::GaRunner`] evolves the population with fitness-proportionate
//! reproduction, two-point crossover, bit-flip mutation and, for
//! variable-length chromosomes (VSLC), block insertion and deletion. The run
//! stops after a fixed number of generations or once the best fitness stops
//! improving by more than a threshold.
//!
//! # Quick Start
//!
//! ```
//! use u_bitga::ga::{Convergence, Encoding, GaConfig, GaRunner, Individual};
//!
//! let population: Vec<Individual> = ["00000000", "00001111", "11110000", "01010101"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let config = GaConfig::default()
//!     .with_encoding(Encoding::Fslc)
//!     .with_convergence(Convergence::Iterations(1))
//!     .with_seed(42);
//!
//! let constant = |_: &Individual, _: &[Individual], _: usize| 1.0;
//! let result = GaRunner::run(&constant, population, &config)?;
//! assert_eq!(result.best.len(), 8);
//! # Ok::<(), u_bitga::error::GaError>(())
//! ```
//!
//! # Logging
//!
//! The engine logs through the [`log`] facade: run start and summary at
//! `info`, one line per generation at `debug`.

pub mod error;
pub mod ga;
pub mod random;
