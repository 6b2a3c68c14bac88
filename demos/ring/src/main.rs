//! ring — smallest demo for the rust_flock simulation framework.
//!
//! Spawns 16 boids on a ring, flies them for 30 simulated seconds inside a
//! 20×20 map, then tightens the map to 8×8 mid-run via a parameter hot-swap
//! to show the boundary nudge herding the flock back in.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_agent::AgentStore;
use flock_core::{FlockParameters, MapBounds, SimConfig, Tick, Vec3};
use flock_output::{CsvWriter, FlockOutputObserver, OutputWriter};
use flock_sim::{FlockBuilder, FlockObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT:              usize = 16;
const SEED:                    u64   = 42;
const DT_SECS:                 f32   = 0.02; // 50 ticks = 1 simulated second
const SIM_SECS:                u64   = 30;
const SNAPSHOT_INTERVAL_TICKS: u64   = 10;
const SPAWN_RADIUS:            f32   = 4.0;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         FlockOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: FlockOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> FlockObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, out_of_bounds: usize) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, out_of_bounds);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== ring — rust_flock boid simulation ===");
    println!("Boids: {BOID_COUNT}  |  Sim: {SIM_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let total_ticks = SIM_SECS * (1.0 / DT_SECS as f64) as u64;
    let config = SimConfig {
        total_ticks,
        dt_secs:                 DT_SECS,
        seed:                    SEED,
        num_threads:             None, // all logical cores with `parallel`
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    println!(
        "Sim: {} ticks at dt={} s, snapshot every {} ticks",
        config.total_ticks, DT_SECS, SNAPSHOT_INTERVAL_TICKS
    );

    // 2. Parameters: start on a roomy 20×20 map.
    let params = FlockParameters {
        bounds: MapBounds::new(20.0, 20.0),
        ..FlockParameters::default()
    };

    // 3. Build the flock on a spawn ring around the origin.
    let mut flock = FlockBuilder::new(config.clone(), BOID_COUNT)
        .spawn_radius(SPAWN_RADIUS)
        .origin(Vec3::ZERO)
        .params(params)
        .build()?;
    println!("Spawned {} boids on a ring of radius {SPAWN_RADIUS}", flock.agents.count);
    println!();

    // 4. Set up output.
    std::fs::create_dir_all("output/ring")?;
    let writer = CsvWriter::new(Path::new("output/ring"))?;
    let mut obs = CountingObserver::new(FlockOutputObserver::new(writer, &config));

    // 5. Run the first half, then tighten the map and run the rest.
    let t0 = Instant::now();
    flock.run_ticks(total_ticks / 2, &mut obs)?;

    let tightened = FlockParameters {
        bounds: MapBounds::new(8.0, 8.0),
        ..flock.params().clone()
    };
    flock.update_parameters(tightened)?;
    println!(
        "T{}: map tightened to 8×8 ({} boids now out of bounds next tick)",
        flock.clock.current_tick.0,
        flock.out_of_bounds_count()
    );

    flock.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 7. Final boid state table.
    println!("{:<6} {:>8} {:>8} {:>8} {:>6}", "Boid", "x", "z", "speed", "oob");
    println!("{}", "-".repeat(40));
    for i in 0..BOID_COUNT {
        let p = flock.agents.positions[i];
        let v = flock.agents.velocities[i];
        println!(
            "{:<6} {:>8.2} {:>8.2} {:>8.2} {:>6}",
            i,
            p.x,
            p.z,
            v.length(),
            if flock.agents.out_of_bounds[i] { "yes" } else { "no" },
        );
    }

    Ok(())
}
