//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Randomness in this framework is confined to population creation (spawn
//! color jitter); the tick loop itself is fully deterministic.  A single
//! `SimRng` seeded from `SimConfig::seed` is consumed in creation order, so
//! the same seed always produces the same population.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG for global operations (spawn placement jitter,
/// per-agent color randomization, etc.).
///
/// Used only in single-threaded contexts.  If parallel randomness is ever
/// needed, give each worker its own `SimRng` derived via [`child`][Self::child].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding independent streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Sample uniformly from `{min, min+step, min+2·step, …}` clamped to
    /// `[min, max]`.
    ///
    /// Mirrors inspector-style sliders that move in fixed increments; used
    /// for spawn color jitter so populations look varied but quantized.
    pub fn gen_range_stepped(&mut self, min: f32, max: f32, step: f32) -> f32 {
        debug_assert!(step > 0.0 && max >= min);
        let steps = ((max - min) / step).floor() as u32;
        let pick = self.0.gen_range(0..=steps);
        (min + pick as f32 * step).clamp(min, max)
    }
}
