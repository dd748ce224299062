//! Seeded random number generation.
//!
//! Every stochastic routine in the crate takes its generator as an
//! argument. Runners build one from their config's `seed` through
//! [`create_rng`], or accept a caller-owned generator via `run_with_rng`.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives the seed of the `index`-th independent restart.
///
/// SplitMix64 finalizer, so neighbouring indices give unrelated streams.
pub fn derive_seed(seed: u64, index: u64) -> u64 {
    let mut z = seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
