//! `FlockOutputObserver<W>` — bridges `FlockObserver` to an `OutputWriter`.

use flock_agent::AgentStore;
use flock_core::{SimConfig, Tick};
use flock_sim::FlockObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`FlockObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FlockObserver`
/// methods have no return value.  After `flock.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    dt_secs:    f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    /// Create an observer backed by `writer`.  The config supplies `dt_secs`
    /// for the summary rows' sim-time column.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            dt_secs: config.dt_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `flock.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Simulated seconds at the start of `tick` for driven runs (fixed dt).
    fn sim_time(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.dt_secs as f64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FlockObserver for FlockOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, out_of_bounds: usize) {
        let row = TickSummaryRow {
            tick: tick.0,
            sim_time_secs: self.sim_time(tick),
            out_of_bounds_agents: out_of_bounds as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = (0..agents.count)
            .map(|i| {
                let p = agents.positions[i];
                let v = agents.velocities[i];
                AgentSnapshotRow {
                    agent_id: i as u32,
                    tick: tick.0,
                    x: p.x,
                    y: p.y,
                    z: p.z,
                    vx: v.x,
                    vy: v.y,
                    vz: v.z,
                    out_of_bounds: agents.out_of_bounds[i],
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
