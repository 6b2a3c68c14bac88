//! Core agent storage: `AgentStore` (SoA kinematic state).
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.positions[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The store holds state only — no behavior.  Steering lives in
//! [`steering`][crate::steering], kinematics in
//! [`kinematics`][crate::kinematics], and the tick driver in `flock-sim`.

use flock_core::{AgentId, Quat, Rgba, Vec3};

/// Structure-of-Arrays storage for all agent state.
///
/// Mutated only during the write phase of a tick (each agent writes its own
/// slot) and by the debug-view toggles, which are pure annotations for
/// rendering hosts.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    /// World-space positions.  Only X/Z are behaviorally significant; Y is
    /// held constant by the simulation.
    pub positions: Vec<Vec3>,

    /// Velocities.  `min_speed <= |v| <= max_speed` after every completed
    /// tick, except while the agent is out of bounds or `|v| == 0`.
    pub velocities: Vec<Vec3>,

    /// Smoothed facing rotations, derived from velocity each tick.
    /// Rendering-only — never an input to movement.
    pub orientations: Vec<Quat>,

    /// Per-tick latch: `true` if the boundary nudge fired for this agent on
    /// the most recent tick.  Recomputed fresh every tick, never persisted.
    pub out_of_bounds: Vec<bool>,

    // ── Rendering annotations ─────────────────────────────────────────────
    /// Per-agent color, randomized at spawn.
    pub colors: Vec<Rgba>,

    /// Per-agent debug-overlay flag (range circles etc.).  Hosts draw;
    /// the simulation ignores it.
    pub debug_view: Vec<bool>,
}

impl AgentStore {
    /// Build a store from parallel per-agent vectors.
    ///
    /// # Panics
    /// Debug-asserts that all vectors share one length.
    pub fn from_parts(
        positions:    Vec<Vec3>,
        velocities:   Vec<Vec3>,
        orientations: Vec<Quat>,
        colors:       Vec<Rgba>,
    ) -> Self {
        let count = positions.len();
        debug_assert_eq!(velocities.len(), count);
        debug_assert_eq!(orientations.len(), count);
        debug_assert_eq!(colors.len(), count);
        Self {
            count,
            positions,
            velocities,
            orientations,
            out_of_bounds: vec![false; count],
            colors,
            debug_view: vec![false; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Per-agent read accessors ──────────────────────────────────────────

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn velocity(&self, agent: AgentId) -> Vec3 {
        self.velocities[agent.index()]
    }

    #[inline]
    pub fn orientation(&self, agent: AgentId) -> Quat {
        self.orientations[agent.index()]
    }

    /// Whether the boundary nudge fired for this agent on the last tick.
    #[inline]
    pub fn is_out_of_bounds(&self, agent: AgentId) -> bool {
        self.out_of_bounds[agent.index()]
    }

    #[inline]
    pub fn color(&self, agent: AgentId) -> Rgba {
        self.colors[agent.index()]
    }

    // ── Debug-view annotations ────────────────────────────────────────────

    #[inline]
    pub fn has_debug_view(&self, agent: AgentId) -> bool {
        self.debug_view[agent.index()]
    }

    /// Flip one agent's debug-overlay flag (e.g. on mouse pick).
    pub fn toggle_debug_view(&mut self, agent: AgentId) {
        let slot = &mut self.debug_view[agent.index()];
        *slot = !*slot;
    }

    /// Clear every agent's debug-overlay flag.
    pub fn disable_all_debug_views(&mut self) {
        self.debug_view.fill(false);
    }
}
