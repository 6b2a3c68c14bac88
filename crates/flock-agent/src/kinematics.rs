//! Per-agent kinematics: boundary nudge, speed clamp, integration, and
//! smoothed orientation.
//!
//! Like the steering rules these are pure functions over one agent's own
//! state — the tick driver composes them in order:
//!
//! ```text
//! new_v  = v + separation + alignment + cohesion
//! (new_v, oob) = apply_boundary(p, new_v, bounds, turn_factor)
//! new_v  = clamp_speed(new_v, min, max, oob)
//! p'     = integrate(p, new_v, dt)
//! rot'   = update_orientation(rot, new_v, rotation_speed, dt)
//! ```

use flock_core::{MapBounds, Quat, Vec3};

/// Velocities shorter than this are treated as zero for normalization.
const EPSILON_SPEED_SQ: f32 = 1e-12;

/// Soft boundary steering: nudge the velocity back toward the map interior.
///
/// If `position.x` exceeds `+half_width`, `turn_factor` is subtracted from
/// `velocity.x`; if it is below `-half_width`, added.  Symmetric on Z against
/// `half_height`.  Returns the nudged velocity and whether any edge fired.
///
/// A nudge, not a clamp or wraparound: agents curve smoothly back instead of
/// teleporting, and the nudge composes with the other steering forces.
pub fn apply_boundary(
    position:    Vec3,
    velocity:    Vec3,
    bounds:      &MapBounds,
    turn_factor: f32,
) -> (Vec3, bool) {
    let mut v = velocity;
    let mut out = false;

    if position.x > bounds.half_width {
        v.x -= turn_factor;
        out = true;
    } else if position.x < -bounds.half_width {
        v.x += turn_factor;
        out = true;
    }

    if position.z > bounds.half_height {
        v.z -= turn_factor;
        out = true;
    } else if position.z < -bounds.half_height {
        v.z += turn_factor;
        out = true;
    }

    (v, out)
}

/// Clamp the speed into `[min_speed, max_speed]` while preserving direction.
///
/// Skipped entirely while `out_of_bounds` is set, so the boundary-correction
/// force can act uncapped for that tick.  A zero-length velocity has no
/// direction to preserve and is returned unchanged.
pub fn clamp_speed(velocity: Vec3, min_speed: f32, max_speed: f32, out_of_bounds: bool) -> Vec3 {
    if out_of_bounds {
        return velocity;
    }
    let len_sq = velocity.length_squared();
    if len_sq <= EPSILON_SPEED_SQ {
        return velocity;
    }
    let len = len_sq.sqrt();
    velocity / len * len.clamp(min_speed, max_speed)
}

/// Explicit Euler position integration.
#[inline]
pub fn integrate(position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
    position + velocity * dt
}

/// Smoothed turn: slerp `current` toward "face along `velocity`" by a
/// fraction `rotation_speed * dt` of the remaining angle (clamped to 1).
///
/// The target is a pure yaw about the vertical axis, so a horizontal velocity
/// never introduces roll or pitch.  A near-zero velocity has no facing
/// direction; the current rotation is kept.
pub fn update_orientation(current: Quat, velocity: Vec3, rotation_speed: f32, dt: f32) -> Quat {
    if velocity.length_squared() <= EPSILON_SPEED_SQ {
        return current;
    }
    let yaw = velocity.x.atan2(velocity.z);
    let target = Quat::from_rotation_y(yaw);
    let t = (rotation_speed * dt).clamp(0.0, 1.0);
    current.slerp(target, t)
}
