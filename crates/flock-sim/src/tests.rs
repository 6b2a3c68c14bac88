//! Integration tests for flock-sim.

use flock_core::{AgentId, FlockError, FlockParameters, MapBounds, SimConfig, Tick, Vec3};

use crate::{Flock, FlockBuilder, FlockObserver, NoopObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        dt_secs: 0.02,
        seed: 42,
        num_threads: Some(1),
        snapshot_interval_ticks: 0,
    }
}

/// Parameters with generous bounds and exact-binary weights, so small test
/// scenarios stay away from the boundary and float sums are exact.
fn open_field_params() -> FlockParameters {
    FlockParameters {
        bounds: MapBounds::new(1_000.0, 1_000.0),
        separation_range: 10.0,
        alignment_range: 10.0,
        cohesion_range: 10.0,
        separation_factor: 0.5,
        alignment_factor: 0.25,
        cohesion_factor: 0.25,
        min_speed: 0.0,
        max_speed: 100.0,
        rotation_speed: 0.0,
        turn_factor: 0.5,
        ..Default::default()
    }
}

fn lone_agent_flock(params: FlockParameters) -> Flock {
    FlockBuilder::new(test_config(10), 1)
        .spawn_radius(0.0)
        .params(params)
        .build()
        .unwrap()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let flock = FlockBuilder::new(test_config(10), 8).build().unwrap();
        assert_eq!(flock.agents.count, 8);
        assert_eq!(flock.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn zero_population_errors() {
        let result = FlockBuilder::new(test_config(10), 0).build();
        assert!(matches!(
            result,
            Err(SimError::Config(FlockError::EmptyPopulation))
        ));
    }

    #[test]
    fn negative_spawn_radius_errors() {
        let result = FlockBuilder::new(test_config(10), 4)
            .spawn_radius(-1.0)
            .build();
        assert!(matches!(
            result,
            Err(SimError::Config(FlockError::NegativeSpawnRadius(_)))
        ));
    }

    #[test]
    fn invalid_params_rejected_at_build() {
        let bad = FlockParameters { min_speed: 5.0, max_speed: 1.0, ..Default::default() };
        let result = FlockBuilder::new(test_config(10), 4).params(bad).build();
        assert!(matches!(
            result,
            Err(SimError::Config(FlockError::Parameter { .. }))
        ));
    }
}

// ── Spawn ring ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn ring_of_four_placement() {
        // Angles 0°, 90°, 180°, 270° on a radius-2 ring, in creation order.
        let flock = FlockBuilder::new(test_config(10), 4)
            .spawn_radius(2.0)
            .build()
            .unwrap();
        let expected = [
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0),
        ];
        for (i, want) in expected.iter().enumerate() {
            let got = flock.agents.positions[i];
            assert!(
                (got - *want).length() < 1e-4,
                "agent {i}: got {got:?}, want {want:?}"
            );
        }
    }

    #[test]
    fn origin_offsets_the_ring() {
        let origin = Vec3::new(100.0, 0.0, -50.0);
        let flock = FlockBuilder::new(test_config(10), 4)
            .spawn_radius(2.0)
            .origin(origin)
            .build()
            .unwrap();
        let got = flock.agents.positions[0];
        assert!((got - (origin + Vec3::new(2.0, 0.0, 0.0))).length() < 1e-4);
    }

    #[test]
    fn spawn_speed_is_max_speed() {
        let params = FlockParameters { max_speed: 6.0, ..Default::default() };
        let flock = FlockBuilder::new(test_config(10), 8)
            .params(params)
            .build()
            .unwrap();
        for v in &flock.agents.velocities {
            assert!((v.length() - 6.0).abs() < 1e-4, "speed {}", v.length());
        }
    }

    #[test]
    fn headings_are_tangential() {
        // Velocity ⟂ radial direction for every spawn angle.
        let flock = FlockBuilder::new(test_config(10), 7)
            .spawn_radius(3.0)
            .build()
            .unwrap();
        for i in 0..7 {
            let radial = flock.agents.positions[i].normalize();
            let v = flock.agents.velocities[i];
            assert!(radial.dot(v).abs() < 1e-3, "agent {i}: dot {}", radial.dot(v));
        }
    }

    #[test]
    fn colors_deterministic_per_seed_and_quantized() {
        let a = FlockBuilder::new(test_config(10), 16).build().unwrap();
        let b = FlockBuilder::new(test_config(10), 16).build().unwrap();
        for i in 0..16 {
            assert_eq!(a.agents.colors[i], b.agents.colors[i]);
            let r = a.agents.colors[i].r;
            assert!((0.5..=0.9).contains(&r), "red channel {r}");
        }
        // A different seed reshuffles the jitter.
        let other = FlockBuilder::new(SimConfig { seed: 7, ..test_config(10) }, 16)
            .build()
            .unwrap();
        let same = (0..16).all(|i| a.agents.colors[i] == other.agents.colors[i]);
        assert!(!same, "different seeds should produce different color draws");
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn invalid_dt_rejected_before_any_mutation() {
        let mut flock = lone_agent_flock(open_field_params());
        let p0 = flock.agents.positions[0];
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(flock.tick(dt), Err(SimError::InvalidDeltaTime(_))));
        }
        assert_eq!(flock.clock.current_tick, Tick::ZERO);
        assert_eq!(flock.agents.positions[0], p0);
    }

    #[test]
    fn lone_agent_flies_straight() {
        // No neighbors → all three contributions are zero → velocity is
        // unchanged and position integrates exactly.
        let mut flock = lone_agent_flock(open_field_params());
        flock.agents.positions[0] = Vec3::new(1.0, 0.0, 2.0);
        flock.agents.velocities[0] = Vec3::new(4.0, 0.0, 0.0);

        flock.tick(0.5).unwrap();
        assert_eq!(flock.agents.velocities[0], Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(flock.agents.positions[0], Vec3::new(3.0, 0.0, 2.0));
        assert!(!flock.agents.out_of_bounds[0]);
    }

    #[test]
    fn speed_bound_holds_across_many_ticks() {
        let params = FlockParameters::default(); // min 2, max 4, bounds ±10
        let mut flock = FlockBuilder::new(test_config(200), 24)
            .spawn_radius(5.0)
            .params(params.clone())
            .build()
            .unwrap();

        for _ in 0..200 {
            flock.tick(0.02).unwrap();
            for i in 0..flock.agents.count {
                if flock.agents.out_of_bounds[i] {
                    continue; // clamp intentionally skipped this tick
                }
                let speed = flock.agents.velocities[i].length();
                assert!(
                    speed >= params.min_speed - 1e-3 && speed <= params.max_speed + 1e-3,
                    "agent {i} speed {speed} outside [{}, {}]",
                    params.min_speed,
                    params.max_speed
                );
            }
        }
    }

    #[test]
    fn tick_result_is_order_independent() {
        // Two flocks with the same agents in reversed creation order must
        // produce mirrored results: every agent reads the same start-of-tick
        // snapshot regardless of where it sits in the collection.
        //
        // Coordinates and weights are exact binary fractions so neighbor
        // summation order cannot introduce rounding differences.
        let state = [
            (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
            (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0)),
            (Vec3::new(0.0, 0.0, 1.0), Vec3::new(-2.0, 0.0, 0.0)),
            (Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0)),
        ];
        let n = state.len();

        let mut forward = FlockBuilder::new(test_config(1), n)
            .params(open_field_params())
            .build()
            .unwrap();
        let mut reversed = FlockBuilder::new(test_config(1), n)
            .params(open_field_params())
            .build()
            .unwrap();

        for (i, (p, v)) in state.iter().enumerate() {
            forward.agents.positions[i] = *p;
            forward.agents.velocities[i] = *v;
            reversed.agents.positions[n - 1 - i] = *p;
            reversed.agents.velocities[n - 1 - i] = *v;
        }

        forward.tick(0.25).unwrap();
        reversed.tick(0.25).unwrap();

        for i in 0..n {
            let j = n - 1 - i;
            assert_eq!(
                forward.agents.positions[i], reversed.agents.positions[j],
                "agent {i} position diverged"
            );
            assert_eq!(
                forward.agents.velocities[i], reversed.agents.velocities[j],
                "agent {i} velocity diverged"
            );
        }
    }

    #[test]
    fn boundary_nudge_skips_clamp_for_that_tick() {
        let params = FlockParameters {
            bounds: MapBounds::new(10.0, 10.0),
            turn_factor: 1.5,
            min_speed: 2.0,
            max_speed: 4.0,
            ..open_field_params()
        };
        let mut flock = lone_agent_flock(params);
        flock.agents.positions[0] = Vec3::new(10.01, 0.0, 0.0);
        flock.agents.velocities[0] = Vec3::new(3.0, 0.0, 0.0);

        flock.tick(0.02).unwrap();

        // Nudged by exactly turn_factor, and the resulting 1.5 < min_speed
        // survives because the clamp is skipped while out of bounds.
        assert_eq!(flock.agents.velocities[0], Vec3::new(1.5, 0.0, 0.0));
        assert!(flock.agents.out_of_bounds[0]);
        assert_eq!(flock.out_of_bounds_count(), 1);
    }

    #[test]
    fn out_of_bounds_latch_resets_each_tick() {
        let params = FlockParameters {
            bounds: MapBounds::new(10.0, 10.0),
            ..open_field_params()
        };
        let mut flock = lone_agent_flock(params);
        flock.agents.positions[0] = Vec3::new(10.5, 0.0, 0.0);
        flock.agents.velocities[0] = Vec3::new(-4.0, 0.0, 0.0);

        flock.tick(1.0).unwrap();
        assert!(flock.agents.out_of_bounds[0], "outside on tick 1");

        // Now well inside (position moved to ~6); the latch must clear.
        flock.tick(1.0).unwrap();
        assert!(!flock.agents.out_of_bounds[0], "latch must reset once inside");
    }

    #[test]
    fn parameter_swap_applies_at_next_tick_start() {
        let mut flock = lone_agent_flock(open_field_params());
        flock.agents.positions[0] = Vec3::new(50.0, 0.0, 0.0); // far outside new bounds
        flock.agents.velocities[0] = Vec3::new(1.0, 0.0, 0.0);

        // Shrink the map to ±20.  Staged, not yet active.
        let shrunk = FlockParameters {
            bounds: MapBounds::new(20.0, 20.0),
            turn_factor: 0.25,
            ..open_field_params()
        };
        flock.update_parameters(shrunk.clone()).unwrap();
        assert_eq!(flock.params().bounds.half_width, 1_000.0, "swap is staged, not active");

        // The next tick runs with the new bounds: the agent at x=50 is out
        // of bounds and gets nudged.
        flock.tick(1.0).unwrap();
        assert_eq!(flock.params().bounds.half_width, 20.0);
        assert_eq!(flock.agents.velocities[0], Vec3::new(0.75, 0.0, 0.0));
        assert!(flock.agents.out_of_bounds[0]);
    }

    #[test]
    fn invalid_parameter_swap_rejected_and_active_set_kept() {
        let mut flock = lone_agent_flock(open_field_params());
        let bad = FlockParameters { separation_range: -1.0, ..Default::default() };
        assert!(flock.update_parameters(bad).is_err());

        // Active set untouched, and the next tick still runs with it.
        assert_eq!(flock.params().bounds.half_width, 1_000.0);
        flock.tick(0.02).unwrap();
        assert_eq!(flock.params().bounds.half_width, 1_000.0);
    }

    #[test]
    fn debug_view_toggles_do_not_disturb_simulation() {
        let mut flock = FlockBuilder::new(test_config(10), 4)
            .params(open_field_params())
            .build()
            .unwrap();
        flock.toggle_debug_view(AgentId(2));
        assert!(flock.agents.has_debug_view(AgentId(2)));

        let before = flock.agents.positions.clone();
        // Toggling is pure annotation; positions move only via tick.
        assert_eq!(flock.agents.positions, before);

        flock.disable_all_debug_views();
        assert!(flock.agents.agent_ids().all(|a| !flock.agents.has_debug_view(a)));
    }
}

// ── Driven runs and observers ─────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_advances_to_end_tick() {
        let mut flock = FlockBuilder::new(test_config(10), 4).build().unwrap();
        flock.run(&mut NoopObserver).unwrap();
        assert_eq!(flock.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let mut flock = FlockBuilder::new(test_config(100), 4).build().unwrap();
        flock.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(flock.clock.current_tick, Tick(5));
        flock.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(flock.clock.current_tick, Tick(8));
    }

    /// Observer that counts callback invocations.
    struct TickCounter {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        sim_ends:  usize,
        last_tick: Option<Tick>,
    }

    impl TickCounter {
        fn new() -> Self {
            Self { starts: 0, ends: 0, snapshots: 0, sim_ends: 0, last_tick: None }
        }
    }

    impl FlockObserver for TickCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, t: Tick, _oob: usize) {
            self.ends += 1;
            self.last_tick = Some(t);
        }
        fn on_snapshot(&mut self, _t: Tick, _agents: &flock_agent::AgentStore) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _t: Tick) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn observer_called_once_per_tick() {
        let mut flock = FlockBuilder::new(test_config(7), 2).build().unwrap();
        let mut obs = TickCounter::new();
        flock.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.sim_ends, 1);
        assert_eq!(obs.last_tick, Some(Tick(6)));
    }

    #[test]
    fn snapshot_interval_honored() {
        let config = SimConfig {
            snapshot_interval_ticks: 2,
            ..test_config(6)
        };
        let mut flock = FlockBuilder::new(config, 2).build().unwrap();
        let mut obs = TickCounter::new();
        flock.run(&mut obs).unwrap();
        // Ticks 0, 2, 4 are multiples of the interval.
        assert_eq!(obs.snapshots, 3);
    }

    #[test]
    fn zero_snapshot_interval_disables_snapshots() {
        let mut flock = FlockBuilder::new(test_config(6), 2).build().unwrap();
        let mut obs = TickCounter::new();
        flock.run(&mut obs).unwrap();
        assert_eq!(obs.snapshots, 0);
    }
}
