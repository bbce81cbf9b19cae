use rand::SeedableRng;

use crate::{config::Config, generator::GenericGenerator, generic::random::MinimalPCG32};

/// A generator which uses [MinimalPCG32] as a source of randomness.
pub type Generator = GenericGenerator<MinimalPCG32>;

impl Generator {
    /// A generator from a config, with a source of randomness seeded from the config.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::from_parts(config, rng)
    }
}
