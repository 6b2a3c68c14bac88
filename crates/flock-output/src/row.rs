//! Plain data row types written by output backends.

/// A snapshot of one agent's kinematic state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub vz:       f32,
    /// Whether the boundary nudge fired for this agent on this tick.
    pub out_of_bounds: bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                 u64,
    /// Simulated seconds at the start of the tick (`tick × dt`).
    pub sim_time_secs:        f64,
    pub out_of_bounds_agents: u64,
}
