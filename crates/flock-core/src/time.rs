//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! host loop (game loop, headless batch runner, test harness) owns real
//! timing and calls the flock once per tick, passing the simulated time step
//! `dt`.  `SimClock` tracks the current tick and the accumulated simulated
//! seconds:
//!
//!   sim_time = Σ dt over all completed ticks
//!
//! Using an integer tick as the canonical time unit means snapshot-interval
//! arithmetic is exact and comparisons are O(1); the floating `dt` only
//! enters position integration and orientation slerp.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 60 ticks per second a u64 lasts
/// ~9.7 billion years — longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and accumulated simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance(dt)` each iteration.
    pub current_tick: Tick,
    /// Simulated seconds accumulated over all completed ticks.
    pub elapsed_secs: f64,
}

impl SimClock {
    /// Create a clock at tick 0 with no elapsed time.
    pub fn new() -> Self {
        Self {
            current_tick: Tick::ZERO,
            elapsed_secs: 0.0,
        }
    }

    /// Advance the clock by one tick of `dt` simulated seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt as f64;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation run configuration.
///
/// Typically constructed by the application crate and passed to the flock
/// builder.  Behavior tunables live separately in
/// [`FlockParameters`][crate::FlockParameters] so they can be hot-swapped
/// between ticks without touching the run configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks a driven run simulates.  Hosts stepping manually via
    /// `tick(dt)` may ignore this.
    pub total_ticks: u64,

    /// Simulated seconds per tick for driven runs.  Default: 1/50 s.
    pub dt_secs: f32,

    /// Master RNG seed.  The same seed always produces identical spawns.
    pub seed: u64,

    /// Advisory worker thread count for hosts that build their own Rayon
    /// pool.  The `parallel` read phase itself runs on the global pool;
    /// `None` means "use all logical cores".
    pub num_threads: Option<usize>,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which a driven run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks: 1_000,
            dt_secs: 0.02,
            seed: 42,
            num_threads: None,
            snapshot_interval_ticks: 0,
        }
    }
}
