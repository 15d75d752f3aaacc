//! `subro-demo run`: play a workflow in real time

use std::io::Write;

use subrogation_workflow_core::SimulatorConfig;

use super::{build_simulator, print_json};
use crate::clock::TokioClock;
use crate::render;
use crate::runner::{run_realtime, RunOutcome};

pub async fn run<W: Write>(
    out: &mut W,
    config: SimulatorConfig,
    workflow: Option<&str>,
    max_ticks: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let mut sim = build_simulator(config, workflow, Box::new(TokioClock::new()))?;

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::warn!("Ctrl-C handler unavailable; running to completion");
            std::future::pending::<()>().await;
        }
    };
    let report = run_realtime(&mut sim, max_ticks, out, shutdown).await?;

    if json {
        print_json(out, &sim.view())?;
    } else {
        write!(out, "{}", render::workflow_view(&sim.view()))?;
    }
    match report.outcome {
        RunOutcome::Failed => anyhow::bail!("workflow {} failed", sim.workflow().id()),
        RunOutcome::Interrupted => writeln!(out, "Interrupted after {} ticks", report.ticks)?,
        RunOutcome::TickLimit => writeln!(out, "Stopped after {} ticks", report.ticks)?,
        RunOutcome::Completed => {}
    }
    Ok(())
}
