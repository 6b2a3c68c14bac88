//! `flock-output` — simulation output writers for the rust_flock framework.
//!
//! The CSV backend creates two files:
//!
//! | File                  | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `agent_snapshots.csv` | per-agent position/velocity at snapshot ticks      |
//! | `tick_summaries.csv`  | per-tick sim time and out-of-bounds agent count    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `flock_sim::FlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FlockOutputObserver::new(writer, &config);
//! flock.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
