//! Bit-string Genetic Algorithm.
//!
//! Evolves a population of [`Individual`] bit strings scored by a
//! caller-supplied [`FitnessOracle`]. Each generation runs
//!
//! ```text
//! reproduce → crossover → mutate → [insert → delete]  (VSLC only)
//! ```
//!
//! then re-scores the new population and tracks the best individual ever
//! seen. [`GaRunner`] repeats generations until the [`Convergence`] rule is
//! met.
//!
//! # Key Types
//!
//! - [`GaConfig`]: encoding, convergence rule, block size, operator rates
//! - [`Generation`]: per-run state advanced one generation at a time
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual and run statistics
//!
//! # Submodules
//!
//! - [`operators`]: two-point crossover, bit-flip mutation, block insertion
//!   and deletion
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg, Korb & Deb (1989), "Messy Genetic Algorithms: Motivation,
//!   Analysis, and First Results" (variable-length strings)

mod config;
mod generation;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{Convergence, Encoding, GaConfig};
pub use generation::Generation;
pub use runner::{GaResult, GaRunner};
pub use selection::reproduce;
pub use types::{FitnessOracle, Individual};
