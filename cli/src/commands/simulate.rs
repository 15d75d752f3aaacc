//! `subro-demo simulate`: headless run on a manual clock
//!
//! Each tick moves the clock forward by the configured tick interval, so a
//! run that takes seconds in real time finishes instantly and reproducibly.

use std::io::Write;

use serde::Serialize;
use subrogation_workflow_core::{
    Clock, Event, ManualClock, SimulatorConfig, SystemClock, WorkflowView,
};

use super::{build_simulator, print_json};
use crate::render;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub ticks: usize,
    pub view: WorkflowView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

/// Drive the workflow until it is terminal or `max_ticks` ticks have run
pub fn simulate(
    config: SimulatorConfig,
    workflow: Option<&str>,
    max_ticks: usize,
    start_ms: u64,
    with_events: bool,
) -> anyhow::Result<SimulationReport> {
    let step = config.tick_interval_ms;
    let clock = ManualClock::new(start_ms);
    let mut sim = build_simulator(config, workflow, Box::new(clock.clone()))?;

    sim.play();
    let mut ticks = 0;
    while ticks < max_ticks && !sim.workflow().is_terminal() {
        if sim.tick().advanced {
            ticks += 1;
        }
        if sim.workflow().is_terminal() {
            break;
        }
        clock.advance(step);
    }
    if !sim.workflow().is_terminal() {
        tracing::warn!(max_ticks, "tick limit reached before the workflow finished");
    }

    let events = if with_events {
        sim.event_log().events().to_vec()
    } else {
        Vec::new()
    };
    Ok(SimulationReport {
        ticks,
        view: sim.view(),
        events,
    })
}

pub fn run<W: Write>(
    out: &mut W,
    config: SimulatorConfig,
    workflow: Option<&str>,
    max_ticks: usize,
    json: bool,
    with_events: bool,
) -> anyhow::Result<()> {
    let report = simulate(config, workflow, max_ticks, SystemClock.now_ms(), with_events)?;
    if json {
        return print_json(out, &report);
    }

    for event in &report.events {
        writeln!(out, "tick {:>3}  {}", event.tick(), event.event_type())?;
    }
    write!(out, "{}", render::workflow_view(&report.view))?;
    writeln!(out, "Ticks: {}", report.ticks)?;
    Ok(())
}
