//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! A [generator](crate::generator) stores a source of rng, and is paramaterised to anything which satisfies the [Rng](rand::Rng) trait.
//! Though, to keep configuration straightforward, [Generator](crate::generator::Generator) fixes the rng to [MinimalPCG32], seeded from the config.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// Advances the state by one step of the underlying LCG.
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    // Both halves are drawn, as uniform sampling of u64 (and usize) reads the high bits.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    // As pcg32_srandom_r, the seed is added between two steps.
    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated, though odd.
        const INCREMENT: u64 = 3215534235932367345;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.step();
        rng
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn two_seed() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        assert_eq!(two_seed.next_u32(), 3845882165);
        assert_eq!(two_seed.next_u32(), 3758051893);
        assert_eq!(two_seed.next_u32(), 3127488971);
        assert_eq!(two_seed.next_u32(), 405677829);
        assert_eq!(two_seed.next_u32(), 769052695);
    }

    #[test]
    fn seventy_three_seed() {
        let mut seventy_three_seed = MinimalPCG32::from_seed(73u64.to_le_bytes());

        assert_eq!(seventy_three_seed.next_u32(), 1485357404);
        assert_eq!(seventy_three_seed.next_u32(), 3254803697);
        assert_eq!(seventy_three_seed.next_u32(), 2095794200);
        assert_eq!(seventy_three_seed.next_u32(), 3995120281);
        assert_eq!(seventy_three_seed.next_u32(), 41909345);
    }

    #[test]
    fn wide_draws() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        assert_eq!(two_seed.next_u64(), 16140709980951773493);
    }

    #[test]
    fn small_seeds_differ() {
        let mut firsts = (0..64_u64)
            .map(|seed| MinimalPCG32::from_seed(seed.to_le_bytes()).next_u32())
            .collect::<Vec<_>>();
        firsts.sort_unstable();
        firsts.dedup();
        assert_eq!(firsts.len(), 64);
    }
}
