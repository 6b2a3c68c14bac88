//! Simulation observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::Tick;

/// Callbacks invoked by [`Flock::run`][crate::Flock::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, out_of_bounds: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {out_of_bounds} agents out of bounds");
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `out_of_bounds` is the number of agents whose boundary nudge fired
    /// this tick.
    fn on_tick_end(&mut self, _tick: Tick, _out_of_bounds: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks; never called when the interval is 0).
    ///
    /// Provides read-only access to the full agent state so output writers
    /// can record positions and velocities without the flock knowing about
    /// any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Flock::run`][crate::Flock::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
