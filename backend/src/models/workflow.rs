//! Workflow model
//!
//! One simulated claim run through the fixed five-stage pipeline.
//!
//! # Critical Invariants
//!
//! 1. `agents` holds exactly one stage per [`AgentKind`], in pipeline order
//! 2. At most one stage is `processing` at any time
//! 3. `total_duration_ms == completed_at - started_at` once completed
//!
//! Progress and average confidence are derived on demand and never stored.

use crate::core::time::elapsed_between;
use crate::models::agent::{AgentKind, AgentStatus, WorkflowAgent};
use serde::{Deserialize, Serialize};

/// Workflow status uses the same four states as its stages
pub type WorkflowStatus = AgentStatus;

/// One simulated claim run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentWorkflow {
    id: String,
    claim_id: String,
    claim_number: String,
    status: WorkflowStatus,
    agents: Vec<WorkflowAgent>,
    current_step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_duration_ms: Option<u64>,
}

impl AgentWorkflow {
    /// Create a pending workflow with the standard five stages
    ///
    /// Stage ids are `<kind-prefix>-<suffix>`, e.g. `ocr-001`.
    ///
    /// # Example
    /// ```
    /// use subrogation_workflow_core::{AgentWorkflow, AgentStatus};
    ///
    /// let wf = AgentWorkflow::new("workflow-009", "claim-009", "SUB-2024-009", "009");
    /// assert_eq!(wf.agents().len(), 5);
    /// assert_eq!(wf.status(), AgentStatus::Pending);
    /// assert_eq!(wf.current_step(), 0);
    /// ```
    pub fn new(
        id: impl Into<String>,
        claim_id: impl Into<String>,
        claim_number: impl Into<String>,
        suffix: &str,
    ) -> Self {
        let agents = AgentKind::PIPELINE
            .iter()
            .map(|kind| {
                let prefix = match kind {
                    AgentKind::OcrParsing => "ocr",
                    AgentKind::LiabilityDetection => "liability",
                    AgentKind::RulesEngine => "rules",
                    AgentKind::DecisionAgent => "decision",
                    AgentKind::WorkflowRouting => "routing",
                };
                WorkflowAgent::new(format!("{}-{}", prefix, suffix), kind.display_name(), *kind)
            })
            .collect();

        Self {
            id: id.into(),
            claim_id: claim_id.into(),
            claim_number: claim_number.into(),
            status: WorkflowStatus::Pending,
            agents,
            current_step: 0,
            started_at: None,
            completed_at: None,
            total_duration_ms: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn claim_id(&self) -> &str {
        &self.claim_id
    }

    pub fn claim_number(&self) -> &str {
        &self.claim_number
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn agents(&self) -> &[WorkflowAgent] {
        &self.agents
    }

    /// 1-based position of the furthest stage reached (0 before the first)
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<u64> {
        self.completed_at
    }

    pub fn total_duration_ms(&self) -> Option<u64> {
        self.total_duration_ms
    }

    /// `completed` or `error`
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// `current_step / agent count`, in `[0.0, 1.0]`
    ///
    /// Reaches 1.0 only once the workflow is completed; while the last stage
    /// is still running the step is counted as `agent count - 1`.
    pub fn progress(&self) -> f64 {
        let total = self.agents.len();
        if total == 0 {
            return 0.0;
        }
        if self.status == WorkflowStatus::Completed {
            return 1.0;
        }
        self.current_step.min(total - 1) as f64 / total as f64
    }

    /// Mean confidence over stages that have one, `None` before any completes
    pub fn average_confidence(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .agents
            .iter()
            .filter_map(|a| a.confidence())
            .map(f64::from)
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    pub fn completed_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_completed()).count()
    }

    pub fn processing_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_processing()).count()
    }

    /// Elapsed time shown for a stage at `now`
    ///
    /// Live for a processing stage, otherwise its recorded duration, else 0.
    pub fn elapsed_ms(agent: &WorkflowAgent, now: u64) -> u64 {
        match (agent.status(), agent.started_at()) {
            (AgentStatus::Processing, Some(started)) => elapsed_between(started, now),
            _ => agent.processing_duration_ms().unwrap_or(0),
        }
    }

    /// Whether the stage list matches the pipeline exactly
    pub fn has_pipeline_shape(&self) -> bool {
        self.agents.len() == AgentKind::PIPELINE.len()
            && self
                .agents
                .iter()
                .zip(AgentKind::PIPELINE.iter())
                .all(|(agent, kind)| agent.kind() == *kind)
    }

    // ========================================================================
    // Mutation (simulator only)
    // ========================================================================

    pub(crate) fn agents_mut(&mut self) -> &mut [WorkflowAgent] {
        &mut self.agents
    }

    pub(crate) fn set_status(&mut self, status: WorkflowStatus) {
        self.status = status;
    }

    pub(crate) fn set_current_step(&mut self, step: usize) {
        self.current_step = step;
    }

    pub(crate) fn stamp_started(&mut self, now: u64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub(crate) fn set_started_at(&mut self, started_at: Option<u64>) {
        self.started_at = started_at;
    }

    /// Terminal success; returns the total duration
    pub(crate) fn finish(&mut self, now: u64) -> u64 {
        let started = self.started_at.unwrap_or(now);
        let total = elapsed_between(started, now);
        self.status = WorkflowStatus::Completed;
        self.completed_at = Some(now);
        self.total_duration_ms = Some(total);
        total
    }

    /// Clear run timestamps and progress, leaving stages to the caller
    pub(crate) fn clear_run(&mut self) {
        self.status = WorkflowStatus::Pending;
        self.current_step = 0;
        self.started_at = None;
        self.completed_at = None;
        self.total_duration_ms = None;
    }
}
