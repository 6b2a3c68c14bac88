//! Population creation: agents arranged on a spawn ring.

use std::f32::consts::TAU;

use flock_agent::AgentStore;
use flock_core::{FlockError, FlockParameters, FlockResult, Quat, SimRng, Vec3};

/// Color jitter applied at spawn: the red channel is sampled from
/// {0.5, 0.6, 0.7, 0.8, 0.9} so populations look varied but quantized.
const COLOR_JITTER: (f32, f32, f32) = (0.5, 0.9, 0.1);

/// Place `count` agents on a circle of radius `spawn_radius` around `origin`,
/// in the horizontal plane.
///
/// Agent `i` sits at angle `θ = i · 2π / count` with heading `-θ` about the
/// vertical axis — tangential, so the initial ring rotates coherently.
/// Initial velocity is the heading direction scaled to `max_speed`.
///
/// Creation order is the `AgentId` order; it is stable so runs with the same
/// seed replay identically.
///
/// # Errors
///
/// - [`FlockError::EmptyPopulation`] if `count == 0`.
/// - [`FlockError::NegativeSpawnRadius`] if `spawn_radius < 0` (or non-finite).
pub fn spawn_ring(
    count:        usize,
    spawn_radius: f32,
    origin:       Vec3,
    params:       &FlockParameters,
    rng:          &mut SimRng,
) -> FlockResult<AgentStore> {
    if count == 0 {
        return Err(FlockError::EmptyPopulation);
    }
    if !spawn_radius.is_finite() || spawn_radius < 0.0 {
        return Err(FlockError::NegativeSpawnRadius(spawn_radius));
    }

    let mut positions = Vec::with_capacity(count);
    let mut velocities = Vec::with_capacity(count);
    let mut orientations = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for i in 0..count {
        let theta = i as f32 * TAU / count as f32;

        let position = origin + Vec3::new(theta.cos(), 0.0, theta.sin()) * spawn_radius;
        let orientation = Quat::from_rotation_y(-theta);
        let forward = orientation * Vec3::Z;

        positions.push(position);
        orientations.push(orientation);
        velocities.push(forward * params.max_speed);

        let (min, max, step) = COLOR_JITTER;
        let mut color = params.boid_color;
        color.r = rng.gen_range_stepped(min, max, step);
        colors.push(color);
    }

    Ok(AgentStore::from_parts(positions, velocities, orientations, colors))
}
