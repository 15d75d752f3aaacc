//! Subcommand implementations
//!
//! Each command writes to the given sink so tests can capture output.

pub mod claims;
pub mod document;
pub mod impact;
pub mod queue;
pub mod review;
pub mod run;
pub mod simulate;
pub mod workflows;

use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use subrogation_workflow_core::{Clock, SimulatorConfig, WorkflowSimulator};

/// Pretty-print a value as JSON
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Demo simulator, switched to `workflow` when one is given
pub fn build_simulator(
    config: SimulatorConfig,
    workflow: Option<&str>,
    clock: Box<dyn Clock>,
) -> anyhow::Result<WorkflowSimulator> {
    let mut sim =
        WorkflowSimulator::with_demo(config, clock).context("creating simulator")?;
    if let Some(id) = workflow {
        sim.select_workflow(id)
            .with_context(|| format!("selecting workflow '{}'", id))?;
    }
    Ok(sim)
}
