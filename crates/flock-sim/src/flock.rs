//! The `Flock` struct and its two-phase tick loop.

use flock_agent::{kinematics, steering, AgentStore};
use flock_core::{AgentId, FlockParameters, Quat, SimClock, SimConfig, Vec3};

use crate::{FlockObserver, SimError, SimResult};

// ── Per-agent step record ─────────────────────────────────────────────────────

/// One agent's fully computed next state.
///
/// Produced during the read phase from the start-of-tick snapshot; written
/// back during the write phase.  Keeping the record self-contained is what
/// lets the read phase run in parallel without touching the store.
struct AgentStep {
    position:      Vec3,
    velocity:      Vec3,
    orientation:   Quat,
    out_of_bounds: bool,
}

/// Compute one agent's step from the snapshot.  Pure: reads `agents` and
/// `params`, mutates nothing.
fn compute_step(i: usize, agents: &AgentStore, params: &FlockParameters, dt: f32) -> AgentStep {
    let id = AgentId(i as u32);

    let sep = steering::separation(id, &agents.positions, params);
    let ali = steering::alignment(id, &agents.positions, &agents.velocities, params);
    let coh = steering::cohesion(id, &agents.positions, params);

    let velocity = agents.velocities[i] + sep + ali + coh;
    let (velocity, out_of_bounds) = kinematics::apply_boundary(
        agents.positions[i],
        velocity,
        &params.bounds,
        params.turn_factor,
    );
    let velocity = kinematics::clamp_speed(
        velocity,
        params.min_speed,
        params.max_speed,
        out_of_bounds,
    );

    AgentStep {
        position: kinematics::integrate(agents.positions[i], velocity, dt),
        velocity,
        orientation: kinematics::update_orientation(
            agents.orientations[i],
            velocity,
            params.rotation_speed,
            dt,
        ),
        out_of_bounds,
    }
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// The owning collection of agents plus shared tunables and the tick driver.
///
/// Drives the two-phase loop described in the crate docs.  The active
/// [`FlockParameters`] are private so the atomic-swap contract of
/// [`update_parameters`][Self::update_parameters] cannot be bypassed;
/// read access goes through [`params`][Self::params].
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct Flock {
    /// Run configuration (total ticks, seed, dt, snapshot interval).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and accumulated sim time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Read freely; mutated only by `tick` and
    /// the debug-view toggles.
    pub agents: AgentStore,

    /// The active parameter set, immutable for the duration of a tick.
    params: FlockParameters,

    /// A validated set staged by `update_parameters`, swapped in at the
    /// start of the next tick.
    pending_params: Option<FlockParameters>,
}

impl Flock {
    pub(crate) fn new(config: SimConfig, agents: AgentStore, params: FlockParameters) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            agents,
            params,
            pending_params: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// The active parameter set.  A set staged by
    /// [`update_parameters`][Self::update_parameters] is not visible here
    /// until the next tick swaps it in.
    ///
    /// Hosts drawing debug overlays read the behavior radii from here.
    pub fn params(&self) -> &FlockParameters {
        &self.params
    }

    /// Stage a new parameter set, replacing the active one atomically at the
    /// start of the next tick — never mid-tick.
    ///
    /// Validation is immediate: an invalid set is rejected here and the
    /// active set stays untouched.
    pub fn update_parameters(&mut self, new_params: FlockParameters) -> SimResult<()> {
        new_params.validate()?;
        self.pending_params = Some(new_params);
        Ok(())
    }

    /// Advance every agent by one step of `dt` simulated seconds.
    ///
    /// Fails before any agent is touched if `dt` is non-finite or
    /// non-positive; a tick otherwise completes for all agents.
    pub fn tick(&mut self, dt: f32) -> SimResult<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidDeltaTime(dt));
        }

        // ── Phase 0: parameter swap ───────────────────────────────────────
        if let Some(params) = self.pending_params.take() {
            self.params = params;
        }

        // ── Phase 1: read — compute all steps from the snapshot ──────────
        let steps = self.compute_steps(dt);

        // ── Phase 2: write — each agent writes only its own slot ─────────
        for (i, step) in steps.into_iter().enumerate() {
            self.agents.positions[i] = step.position;
            self.agents.velocities[i] = step.velocity;
            self.agents.orientations[i] = step.orientation;
            self.agents.out_of_bounds[i] = step.out_of_bounds;
        }

        self.clock.advance(dt);
        Ok(())
    }

    /// Run from the current tick to `config.end_tick()` at `config.dt_secs`,
    /// invoking observer hooks at every tick boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step_once(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_once(observer)?;
        }
        Ok(())
    }

    /// Number of agents whose boundary nudge fired on the last tick.
    pub fn out_of_bounds_count(&self) -> usize {
        self.agents.out_of_bounds.iter().filter(|&&b| b).count()
    }

    /// Flip one agent's debug-overlay flag (host-side annotation only).
    pub fn toggle_debug_view(&mut self, agent: AgentId) {
        self.agents.toggle_debug_view(agent);
    }

    /// Clear every agent's debug-overlay flag.
    pub fn disable_all_debug_views(&mut self) {
        self.agents.disable_all_debug_views();
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn step_once<O: FlockObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.tick(self.config.dt_secs)?;
        observer.on_tick_end(now, self.out_of_bounds_count());
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        Ok(())
    }

    /// Read phase: compute every agent's step from the start-of-tick
    /// snapshot.  With the `parallel` feature the per-agent computations run
    /// on Rayon's thread pool — they are independent and side-effect-free.
    fn compute_steps(&self, dt: f32) -> Vec<AgentStep> {
        let agents = &self.agents;
        let params = &self.params;

        #[cfg(not(feature = "parallel"))]
        {
            (0..agents.count)
                .map(|i| compute_step(i, agents, params, dt))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..agents.count)
                .into_par_iter()
                .map(|i| compute_step(i, agents, params, dt))
                .collect()
        }
    }
}
