//! Real-time runner against tokio's paused clock

use std::time::Duration;

use subro_demo::commands::build_simulator;
use subro_demo::{run_realtime, RunOutcome, TokioClock};
use subrogation_workflow_core::{AgentStatus, SimulatorConfig};

const EPOCH: u64 = 1_724_753_700_000;

fn sim_with(config: SimulatorConfig, workflow: Option<&str>) -> subrogation_workflow_core::WorkflowSimulator {
    build_simulator(config, workflow, Box::new(TokioClock::starting_at(EPOCH))).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_runs_fresh_workflow_to_completion() {
    let mut sim = sim_with(SimulatorConfig::default(), None);
    let mut out = Vec::new();

    let report = run_realtime(&mut sim, None, &mut out, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.ticks, 16);
    assert!(report.renders > 0);
    assert_eq!(sim.workflow().status(), AgentStatus::Completed);
    assert_eq!(sim.workflow().total_duration_ms(), Some(15_000));
    assert!(!sim.is_playing());

    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().all(|l| l.starts_with("SUB-2024-001")));
    assert!(text.contains("Document Parser"));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_pauses_mid_run() {
    let mut sim = sim_with(SimulatorConfig::default(), None);
    let mut out = Vec::new();

    let shutdown = tokio::time::sleep(Duration::from_millis(4_500));
    let report = run_realtime(&mut sim, None, &mut out, shutdown).await.unwrap();

    assert_eq!(report.outcome, RunOutcome::Interrupted);
    assert!(!sim.is_playing());
    assert_eq!(sim.workflow().status(), AgentStatus::Processing);
    assert_eq!(sim.workflow().current_step(), 2);
    assert_eq!(sim.workflow().completed_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_tick_limit() {
    let mut sim = sim_with(SimulatorConfig::default(), None);
    let mut out = Vec::new();

    let report = run_realtime(&mut sim, Some(3), &mut out, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::TickLimit);
    assert_eq!(report.ticks, 3);
    assert_eq!(sim.tick_count(), 3);
    assert!(!sim.is_playing());
}

#[tokio::test(start_paused = true)]
async fn test_faster_tick_interval_finishes_sooner() {
    let config = SimulatorConfig {
        tick_interval_ms: 500,
        completion_threshold_ms: 1_000,
        ..SimulatorConfig::default()
    };
    let mut sim = sim_with(config, Some("SUB-2024-001"));
    let mut out = Vec::new();

    let started = tokio::time::Instant::now();
    let report = run_realtime(&mut sim, None, &mut out, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(started.elapsed(), Duration::from_millis(5_000));
    assert_eq!(sim.workflow().total_duration_ms(), Some(5_000));
}

#[tokio::test(start_paused = true)]
async fn test_failure_ends_run() {
    let config = SimulatorConfig {
        failure_probability: 1.0,
        ..SimulatorConfig::default()
    };
    let mut sim = sim_with(config, None);
    let mut out = Vec::new();

    let report = run_realtime(&mut sim, None, &mut out, std::future::pending::<()>())
        .await
        .unwrap();

    assert_eq!(report.outcome, RunOutcome::Failed);
    assert_eq!(sim.workflow().status(), AgentStatus::Error);

    // A second run on the failed workflow does nothing
    let again = run_realtime(&mut sim, None, &mut out, std::future::pending::<()>())
        .await
        .unwrap();
    assert_eq!(again.outcome, RunOutcome::Failed);
    assert_eq!(again.ticks, 0);
}
