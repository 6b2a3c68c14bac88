//! The three steering rules: separation, alignment, cohesion.
//!
//! # Contract
//!
//! Each function reads only the start-of-tick snapshot slices and the shared
//! parameter set; nothing is mutated.  This is what makes the read phase of
//! the tick order-independent and safe to parallelize.
//!
//! Shared semantics across all three rules:
//!
//! - Range tests use true Euclidean distance, strictly `< range`.  Squared
//!   distance is never compared against an unsquared threshold.
//! - Self is excluded by index (`AgentId`), a stable identity comparison.
//! - Zero qualifying neighbors → the zero vector.  Not an error: lone agents
//!   are an expected steady-state condition.
//! - A disabled rule contributes the zero vector regardless of neighbors.

use flock_core::{AgentId, FlockParameters, Vec3};

/// Steering contribution pushing `agent` away from too-close neighbors.
///
/// Accumulates `(self_pos − neighbor_pos)` for every neighbor strictly within
/// `separation_range` — unweighted, per the accumulate-then-average form —
/// then averages over the qualifying count and scales by `separation_factor`.
pub fn separation(agent: AgentId, positions: &[Vec3], params: &FlockParameters) -> Vec3 {
    if !params.separation_enabled {
        return Vec3::ZERO;
    }
    let self_pos = positions[agent.index()];

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (j, &other) in positions.iter().enumerate() {
        if j == agent.index() {
            continue;
        }
        if self_pos.distance(other) < params.separation_range {
            sum += self_pos - other;
            count += 1;
        }
    }

    if count == 0 {
        Vec3::ZERO
    } else {
        sum / count as f32 * params.separation_factor
    }
}

/// Steering contribution matching `agent`'s velocity to the average velocity
/// of neighbors strictly within `alignment_range`.
pub fn alignment(
    agent:      AgentId,
    positions:  &[Vec3],
    velocities: &[Vec3],
    params:     &FlockParameters,
) -> Vec3 {
    if !params.alignment_enabled {
        return Vec3::ZERO;
    }
    let self_pos = positions[agent.index()];

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (j, &other) in positions.iter().enumerate() {
        if j == agent.index() {
            continue;
        }
        if self_pos.distance(other) < params.alignment_range {
            sum += velocities[j];
            count += 1;
        }
    }

    if count == 0 {
        Vec3::ZERO
    } else {
        sum / count as f32 * params.alignment_factor
    }
}

/// Steering contribution pulling `agent` toward the centroid of neighbors
/// strictly within `cohesion_range`.
///
/// The direction to the centroid is normalized; if the centroid coincides
/// exactly with the agent's position the contribution is the zero vector
/// (degenerate, avoids dividing by zero).
pub fn cohesion(agent: AgentId, positions: &[Vec3], params: &FlockParameters) -> Vec3 {
    if !params.cohesion_enabled {
        return Vec3::ZERO;
    }
    let self_pos = positions[agent.index()];

    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for (j, &other) in positions.iter().enumerate() {
        if j == agent.index() {
            continue;
        }
        if self_pos.distance(other) < params.cohesion_range {
            sum += other;
            count += 1;
        }
    }

    if count == 0 {
        Vec3::ZERO
    } else {
        let centroid = sum / count as f32;
        (centroid - self_pos).normalize_or_zero() * params.cohesion_factor
    }
}
