//! Real-time driver
//!
//! Two independent timers drive a running workflow: the tick timer advances
//! the simulator, the render timer refreshes the display. Both stop when the
//! workflow finishes or the shutdown future resolves.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use subrogation_workflow_core::{AgentStatus, WorkflowSimulator};
use tokio::time::{interval, MissedTickBehavior};

use crate::render;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed,
    /// Shutdown requested; the simulator was paused
    Interrupted,
    /// Stopped after the requested number of ticks
    TickLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Ticks that advanced the workflow
    pub ticks: usize,
    pub renders: usize,
}

fn finished(sim: &WorkflowSimulator) -> Option<RunOutcome> {
    match sim.workflow().status() {
        AgentStatus::Completed => Some(RunOutcome::Completed),
        AgentStatus::Error => Some(RunOutcome::Failed),
        _ => None,
    }
}

/// Play `sim` until it finishes, `max_ticks` ticks advance, or `shutdown`
/// resolves, writing a status line on every render tick
pub async fn run_realtime<W, F>(
    sim: &mut WorkflowSimulator,
    max_ticks: Option<usize>,
    out: &mut W,
    shutdown: F,
) -> anyhow::Result<RunReport>
where
    W: Write,
    F: Future<Output = ()>,
{
    if !sim.play() {
        let outcome = finished(sim).unwrap_or(RunOutcome::Interrupted);
        return Ok(RunReport {
            outcome,
            ticks: 0,
            renders: 0,
        });
    }

    let config = sim.config().clone();
    let mut tick_timer = interval(Duration::from_millis(config.tick_interval_ms));
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut render_timer = interval(Duration::from_millis(config.render_interval_ms));
    render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        workflow_id = sim.workflow().id(),
        tick_ms = config.tick_interval_ms,
        render_ms = config.render_interval_ms,
        "run started"
    );

    tokio::pin!(shutdown);
    let mut ticks = 0;
    let mut renders = 0;

    let outcome = loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                sim.pause();
                break RunOutcome::Interrupted;
            }
            _ = tick_timer.tick() => {
                if sim.tick().advanced {
                    ticks += 1;
                }
                if let Some(outcome) = finished(sim) {
                    break outcome;
                }
                if max_ticks.is_some_and(|limit| ticks >= limit) {
                    sim.pause();
                    break RunOutcome::TickLimit;
                }
            }
            _ = render_timer.tick() => {
                writeln!(out, "{}", render::status_line(&sim.view()))?;
                renders += 1;
            }
        }
    };

    tracing::info!(?outcome, ticks, renders, "run stopped");
    Ok(RunReport {
        outcome,
        ticks,
        renders,
    })
}
