//! Read model
//!
//! Everything a renderer shows is computed here from stored state at a given
//! clock reading. Nothing in this module is cached on the workflow.

use crate::models::{AgentInput, AgentKind, AgentOutput, AgentStatus, AgentWorkflow};
use chrono::{DateTime, SecondsFormat};
use serde::Serialize;
use uuid::Uuid;

/// `m:ss`
pub fn format_clock(ms: u64) -> String {
    let seconds = ms / 1_000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// `N/A`, `850ms` or `3.2s`
pub fn format_processing_time(ms: Option<u64>) -> String {
    match ms {
        None | Some(0) => "N/A".to_string(),
        Some(ms) if ms < 1_000 => format!("{}ms", ms),
        Some(ms) => format!("{:.1}s", ms as f64 / 1_000.0),
    }
}

/// RFC 3339 rendering of an epoch-millisecond timestamp
pub fn format_timestamp(ms: u64) -> Option<String> {
    let ms = i64::try_from(ms).ok()?;
    DateTime::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// One stage row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    pub id: String,
    pub name: String,
    pub kind: AgentKind,
    pub status: AgentStatus,
    /// 1-based
    pub step: usize,
    pub elapsed_ms: u64,
    pub elapsed_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<AgentInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<AgentOutput>,
}

/// Whole-workflow snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowView {
    pub workflow_id: String,
    pub claim_id: String,
    pub claim_number: String,
    pub run_id: String,
    pub status: AgentStatus,
    pub playing: bool,
    pub current_step: usize,
    pub agent_count: usize,
    /// `current_step / agent_count`
    pub progress: f64,
    pub completed_agents: usize,
    pub average_confidence: Option<f64>,
    /// Rounded, for display
    pub average_confidence_pct: Option<u8>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub total_duration_ms: Option<u64>,
    /// `m:ss`, or `In Progress` until the workflow completes
    pub total_duration_display: String,
    pub agents: Vec<AgentView>,
}

impl WorkflowView {
    pub fn build(workflow: &AgentWorkflow, run_id: Uuid, playing: bool, now: u64) -> Self {
        let agents = workflow
            .agents()
            .iter()
            .enumerate()
            .map(|(idx, agent)| {
                let elapsed = AgentWorkflow::elapsed_ms(agent, now);
                AgentView {
                    id: agent.id().to_string(),
                    name: agent.name().to_string(),
                    kind: agent.kind(),
                    status: agent.status(),
                    step: idx + 1,
                    elapsed_ms: elapsed,
                    elapsed_display: format_processing_time(Some(elapsed)),
                    confidence: agent.confidence(),
                    input: agent.input().cloned(),
                    output: agent.output().cloned(),
                }
            })
            .collect();

        let average = workflow.average_confidence();
        Self {
            workflow_id: workflow.id().to_string(),
            claim_id: workflow.claim_id().to_string(),
            claim_number: workflow.claim_number().to_string(),
            run_id: run_id.to_string(),
            status: workflow.status(),
            playing,
            current_step: workflow.current_step(),
            agent_count: workflow.agents().len(),
            progress: workflow.progress(),
            completed_agents: workflow.completed_count(),
            average_confidence: average,
            average_confidence_pct: average.map(|avg| avg.round() as u8),
            started_at: workflow.started_at().and_then(format_timestamp),
            completed_at: workflow.completed_at().and_then(format_timestamp),
            total_duration_ms: workflow.total_duration_ms(),
            total_duration_display: workflow
                .total_duration_ms()
                .map(format_clock)
                .unwrap_or_else(|| "In Progress".to_string()),
            agents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65_400), "1:05");
    }

    #[test]
    fn test_format_processing_time() {
        assert_eq!(format_processing_time(None), "N/A");
        assert_eq!(format_processing_time(Some(0)), "N/A");
        assert_eq!(format_processing_time(Some(850)), "850ms");
        assert_eq!(format_processing_time(Some(3_240)), "3.2s");
    }

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(
            format_timestamp(0).as_deref(),
            Some("1970-01-01T00:00:00.000Z")
        );
    }
}
