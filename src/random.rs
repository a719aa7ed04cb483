//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded RNG.
///
/// The same seed always yields the same stream, so a run with a fixed
/// [`GaConfig::seed`](crate::ga::GaConfig::seed) is reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
