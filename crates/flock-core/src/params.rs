//! Shared behavior parameters.
//!
//! # Design
//!
//! `FlockParameters` is an explicit immutable configuration value: the flock
//! owns the active set, agents only ever receive `&FlockParameters`, and
//! hot-swaps happen atomically between ticks.  No agent ever mutates it, and
//! no tick ever observes a partially updated set.
//!
//! Validation is fail-fast: [`FlockParameters::validate`] runs at build time
//! and on every hot-swap, so the tick loop can assume a well-formed set and
//! never has to handle configuration errors mid-flight.

use crate::{FlockError, FlockResult};

// ── MapBounds ─────────────────────────────────────────────────────────────────

/// Horizontal extent of the map, centered on the origin.
///
/// Agents beyond `±half_width` on X or `±half_height` on Z receive a soft
/// steering nudge back toward the interior — never a hard clamp or wraparound.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub half_width:  f32,
    pub half_height: f32,
}

impl MapBounds {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self { half_width, half_height }
    }
}

// ── Rgba ──────────────────────────────────────────────────────────────────────

/// A linear RGBA color, rendering-only passthrough.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// ── FlockParameters ───────────────────────────────────────────────────────────

/// All behavior tunables, shared by every agent and immutable for the
/// duration of a tick.
///
/// The three steering rules can be toggled independently; a disabled rule
/// contributes the zero vector.  `boid_scale` and `boid_color` are carried
/// for rendering hosts and have no effect on the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockParameters {
    /// Map extent for the boundary nudge.
    pub bounds: MapBounds,

    // ── Behavior toggles ──────────────────────────────────────────────────
    pub separation_enabled: bool,
    pub alignment_enabled:  bool,
    pub cohesion_enabled:   bool,

    // ── Behavior radii (strict `<` comparison, true Euclidean distance) ───
    pub separation_range: f32,
    pub alignment_range:  f32,
    pub cohesion_range:   f32,

    // ── Behavior weights ──────────────────────────────────────────────────
    pub separation_factor: f32,
    pub alignment_factor:  f32,
    pub cohesion_factor:   f32,

    // ── Speed envelope ────────────────────────────────────────────────────
    /// Lower speed bound enforced by the per-tick clamp (except while out of
    /// bounds).
    pub min_speed: f32,
    /// Upper speed bound; also the initial spawn speed.
    pub max_speed: f32,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// Slerp rate for the smoothed turn toward the velocity direction.
    pub rotation_speed: f32,
    /// Magnitude of the per-axis boundary nudge applied while out of bounds.
    pub turn_factor: f32,

    // ── Rendering passthrough ─────────────────────────────────────────────
    pub boid_scale: f32,
    pub boid_color: Rgba,
}

impl Default for FlockParameters {
    fn default() -> Self {
        Self {
            bounds: MapBounds::new(10.0, 10.0),

            separation_enabled: true,
            alignment_enabled:  true,
            cohesion_enabled:   true,

            separation_range: 1.0,
            alignment_range:  2.5,
            cohesion_range:   2.5,

            separation_factor: 0.5,
            alignment_factor:  0.3,
            cohesion_factor:   0.3,

            min_speed: 2.0,
            max_speed: 4.0,

            rotation_speed: 5.0,
            turn_factor:    0.5,

            boid_scale: 0.75,
            boid_color: Rgba::new(0.7, 0.0, 0.0, 1.0),
        }
    }
}

impl FlockParameters {
    /// Validate every field, returning the first violation.
    ///
    /// Called at build time and on every hot-swap so configuration errors
    /// surface immediately instead of inside the tick loop.
    pub fn validate(&self) -> FlockResult<()> {
        let non_negative = [
            ("separation_range", self.separation_range),
            ("alignment_range", self.alignment_range),
            ("cohesion_range", self.cohesion_range),
            ("separation_factor", self.separation_factor),
            ("alignment_factor", self.alignment_factor),
            ("cohesion_factor", self.cohesion_factor),
            ("min_speed", self.min_speed),
            ("rotation_speed", self.rotation_speed),
            ("turn_factor", self.turn_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::Parameter {
                    name,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        let positive = [
            ("bounds.half_width", self.bounds.half_width),
            ("bounds.half_height", self.bounds.half_height),
            ("boid_scale", self.boid_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlockError::Parameter {
                    name,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }

        if !self.max_speed.is_finite() || self.max_speed < self.min_speed {
            return Err(FlockError::Parameter {
                name:   "max_speed",
                value:  self.max_speed,
                reason: "must be finite and >= min_speed",
            });
        }

        Ok(())
    }
}
