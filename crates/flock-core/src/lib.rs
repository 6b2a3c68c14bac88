//! `flock-core` — foundational types for the `rust_flock` simulation framework.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                               |
//! | [`params`]  | `FlockParameters`, `MapBounds`, `Rgba`                  |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                         |
//! | [`rng`]     | `SimRng` (deterministic, seeded from `SimConfig::seed`) |
//! | [`error`]   | `FlockError`, `FlockResult`                             |
//!
//! Vector math comes from `glam`; [`Vec3`] and [`Quat`] are re-exported so
//! downstream crates share one math substrate without naming `glam` directly.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (glam included) |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use glam::{Quat, Vec3};

pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use params::{FlockParameters, MapBounds, Rgba};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
