//! `flock-sim` — tick loop orchestrator for the rust_flock framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! tick(dt):
//!   ⓪ Swap — a staged parameter set (from update_parameters) becomes
//!            active.  Never happens mid-tick.
//!   ① Read  — for every agent, from the start-of-tick snapshot only:
//!            separation + alignment + cohesion, boundary nudge, speed
//!            clamp, position integration, orientation slerp — collected
//!            into per-agent step records (parallel with the `parallel`
//!            feature).
//!   ② Write — step records are written back; each agent writes only its
//!            own slot.
//! ```
//!
//! The read phase fully precedes the write phase, so no agent ever reads
//! another agent's post-tick state within the same tick.  Permuting the
//! iteration order cannot change the result.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the read phase on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::SimConfig;
//! use flock_sim::{FlockBuilder, NoopObserver};
//!
//! let mut flock = FlockBuilder::new(SimConfig::default(), 64)
//!     .spawn_radius(5.0)
//!     .build()?;
//! flock.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod flock;
pub mod observer;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use flock::Flock;
pub use observer::{FlockObserver, NoopObserver};
pub use spawn::spawn_ring;
