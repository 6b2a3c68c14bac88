//! Integration tests for flock-output.

use std::fs;

use flock_agent::AgentStore;
use flock_core::{Quat, Rgba, SimConfig, Tick, Vec3};
use flock_sim::{FlockBuilder, FlockObserver};
use tempfile::tempdir;

use crate::{CsvWriter, FlockOutputObserver, OutputWriter, TickSummaryRow};

fn run_config(total_ticks: u64, snapshot_interval_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        snapshot_interval_ticks,
        seed: 42,
        ..SimConfig::default()
    }
}

#[test]
fn csv_files_created_with_headers() {
    let dir = tempdir().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer.finish().unwrap();

    let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
    assert_eq!(
        snapshots.lines().next().unwrap(),
        "agent_id,tick,x,y,z,vx,vy,vz,out_of_bounds"
    );

    let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert_eq!(
        summaries.lines().next().unwrap(),
        "tick,sim_time_secs,out_of_bounds_agents"
    );
}

#[test]
fn run_writes_expected_row_counts() {
    let dir = tempdir().unwrap();
    let config = run_config(4, 2);
    let mut flock = FlockBuilder::new(config.clone(), 3).build().unwrap();

    let writer = CsvWriter::new(dir.path()).unwrap();
    let mut obs = FlockOutputObserver::new(writer, &config);
    flock.run(&mut obs).unwrap();
    assert!(obs.take_error().is_none());

    // Snapshots at ticks 0 and 2 → 2 snapshots × 3 agents + header.
    let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
    assert_eq!(snapshots.lines().count(), 1 + 2 * 3);

    // One summary per tick + header.
    let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert_eq!(summaries.lines().count(), 1 + 4);

    // The sim-time column advances by dt per tick.
    for (i, line) in summaries.lines().skip(1).enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[0], i.to_string(), "tick column");
        let sim_time: f64 = fields[1].parse().unwrap();
        let want = i as f64 * config.dt_secs as f64;
        assert!((sim_time - want).abs() < 1e-9, "row {i}: sim_time {sim_time}");
    }
}

#[test]
fn snapshot_rows_carry_agent_state() {
    let dir = tempdir().unwrap();
    let store = AgentStore::from_parts(
        vec![Vec3::new(1.5, 0.0, -2.5)],
        vec![Vec3::new(0.25, 0.0, 0.0)],
        vec![Quat::IDENTITY],
        vec![Rgba::new(0.7, 0.0, 0.0, 1.0)],
    );

    let writer = CsvWriter::new(dir.path()).unwrap();
    let mut obs = FlockOutputObserver::new(writer, &SimConfig::default());
    obs.on_snapshot(Tick(7), &store);
    assert!(obs.take_error().is_none());
    obs.into_writer().finish().unwrap();

    let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
    let fields: Vec<&str> = snapshots.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(fields[0], "0", "agent_id");
    assert_eq!(fields[1], "7", "tick");
    assert_eq!(fields[2], "1.5", "x");
    assert_eq!(fields[4], "-2.5", "z");
    assert_eq!(fields[5], "0.25", "vx");
    assert_eq!(fields[8], "0", "out_of_bounds");
}

#[test]
fn finish_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    writer
        .write_tick_summary(&TickSummaryRow {
            tick: 0,
            sim_time_secs: 0.0,
            out_of_bounds_agents: 0,
        })
        .unwrap();
    writer.finish().unwrap();
    writer.finish().unwrap();

    let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert_eq!(summaries.lines().count(), 2);
}
