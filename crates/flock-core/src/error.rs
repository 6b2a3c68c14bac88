//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FlockError` via `From` impls, or keep them separate and wrap `FlockError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.
//!
//! Degenerate geometry (no neighbors in range, zero-length velocity, centroid
//! coincident with an agent) is NOT an error — those are expected steady-state
//! conditions handled locally by returning the zero vector.  `FlockError` is
//! reserved for configuration mistakes, surfaced at build/update time before
//! the tick loop ever runs.

use thiserror::Error;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    /// A behavior parameter failed validation.
    #[error("parameter `{name}` {reason} (got {value})")]
    Parameter {
        name:   &'static str,
        value:  f32,
        reason: &'static str,
    },

    /// A population of zero agents was requested.
    #[error("population count must be at least 1")]
    EmptyPopulation,

    /// A negative spawn-ring radius was requested.
    #[error("spawn radius must be non-negative (got {0})")]
    NegativeSpawnRadius(f32),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
