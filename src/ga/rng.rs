//! Seeded random streams for the parallel harness.
//!
//! A single shared generator would serialise the workers and tie results to
//! scheduling order. Instead, every child slot of every generation gets its
//! own PCG stream derived from the master seed, so a run is bit-for-bit
//! reproducible for any worker count — serial execution included.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The generator used throughout the crate.
pub type GaRng = Pcg64Mcg;

/// Creates a generator from a bare seed.
pub fn create_rng(seed: u64) -> GaRng {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Derives the independent stream for one child slot of one generation.
///
/// Generation 0 seeds the initial population; generation `g ≥ 1` seeds the
/// `P − 1` child slots of that generation.
pub fn stream_rng(master_seed: u64, generation: u64, slot: u64) -> GaRng {
    let mut state = master_seed;
    state = mix(state ^ mix(generation.wrapping_add(0x9E37_79B9_7F4A_7C15)));
    state = mix(state ^ mix(slot.wrapping_add(0xD1B5_4A32_D192_ED03)));
    Pcg64Mcg::seed_from_u64(state)
}

/// SplitMix64 finaliser; decorrelates adjacent generation/slot pairs.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
