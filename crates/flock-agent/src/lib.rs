//! `flock-agent` — Structure-of-Arrays agent storage, steering rules, and
//! kinematics for the `rust_flock` framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`store`]      | `AgentStore` (SoA arrays) and read accessors            |
//! | [`steering`]   | separation / alignment / cohesion contributions         |
//! | [`kinematics`] | boundary nudge, speed clamp, integration, orientation   |
//!
//! The steering and kinematics functions are pure: they read a start-of-tick
//! snapshot (slices borrowed from `AgentStore`) and return new values without
//! mutating anything.  The tick driver in `flock-sim` owns the write phase.

pub mod kinematics;
pub mod steering;
pub mod store;


pub use store::AgentStore;
