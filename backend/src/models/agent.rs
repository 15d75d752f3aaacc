//! Pipeline stage model
//!
//! A [`WorkflowAgent`] is one stage of the five-stage claim pipeline.
//! Its `kind` is fixed at creation; everything else is mutated by the
//! simulator tick, never by the agent itself.
//!
//! ```text
//! pending ──► processing ──► completed
//!                   └──────► error
//! ```

use crate::models::payload::{AgentInput, AgentOutput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage kind, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    OcrParsing,
    LiabilityDetection,
    RulesEngine,
    DecisionAgent,
    WorkflowRouting,
}

impl AgentKind {
    /// Every kind, in the order the pipeline runs them
    pub const PIPELINE: [AgentKind; 5] = [
        AgentKind::OcrParsing,
        AgentKind::LiabilityDetection,
        AgentKind::RulesEngine,
        AgentKind::DecisionAgent,
        AgentKind::WorkflowRouting,
    ];

    /// Snake-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::OcrParsing => "ocr_parsing",
            AgentKind::LiabilityDetection => "liability_detection",
            AgentKind::RulesEngine => "rules_engine",
            AgentKind::DecisionAgent => "decision_agent",
            AgentKind::WorkflowRouting => "workflow_routing",
        }
    }

    /// Default display name for a stage of this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::OcrParsing => "Document Parser",
            AgentKind::LiabilityDetection => "Liability Detector",
            AgentKind::RulesEngine => "Rules Engine",
            AgentKind::DecisionAgent => "Decision Agent",
            AgentKind::WorkflowRouting => "Workflow Router",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status shared by stages and workflows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Pending => "pending",
            AgentStatus::Processing => "processing",
            AgentStatus::Completed => "completed",
            AgentStatus::Error => "error",
        }
    }

    /// `completed` or `error`
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentStatus::Completed | AgentStatus::Error)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pipeline stage
///
/// Fields are private so that only the simulator can move a stage through
/// its lifecycle; the `begin`/`complete`/`fail`/`clear` methods keep the
/// timestamps consistent with the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowAgent {
    id: String,
    name: String,
    kind: AgentKind,
    status: AgentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<AgentInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<AgentOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_duration_ms: Option<u64>,
}

impl WorkflowAgent {
    /// Create a pending stage
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: AgentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            status: AgentStatus::Pending,
            input: None,
            output: None,
            confidence: None,
            started_at: None,
            processing_duration_ms: None,
        }
    }

    /// Attach an input payload (builder style, used by scenario fixtures)
    pub fn with_input(mut self, input: AgentInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn status(&self) -> AgentStatus {
        self.status
    }

    pub fn input(&self) -> Option<&AgentInput> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&AgentOutput> {
        self.output.as_ref()
    }

    pub fn confidence(&self) -> Option<u8> {
        self.confidence
    }

    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    pub fn processing_duration_ms(&self) -> Option<u64> {
        self.processing_duration_ms
    }

    pub fn is_pending(&self) -> bool {
        self.status == AgentStatus::Pending
    }

    pub fn is_processing(&self) -> bool {
        self.status == AgentStatus::Processing
    }

    pub fn is_completed(&self) -> bool {
        self.status == AgentStatus::Completed
    }

    /// Set the input if none is present yet
    ///
    /// Payloads of another kind are ignored; returns whether it was attached.
    pub(crate) fn offer_input(&mut self, input: AgentInput) -> bool {
        if self.input.is_some() || input.kind() != self.kind {
            return false;
        }
        self.input = Some(input);
        true
    }

    /// `pending → processing`
    pub(crate) fn begin(&mut self, now: u64) {
        self.status = AgentStatus::Processing;
        self.started_at = Some(now);
    }

    /// `processing → completed`
    pub(crate) fn complete(&mut self, duration_ms: u64, confidence: u8, output: AgentOutput) {
        debug_assert_eq!(output.kind(), self.kind);
        self.status = AgentStatus::Completed;
        self.processing_duration_ms = Some(duration_ms);
        self.confidence = Some(confidence);
        self.output = Some(output);
    }

    /// `processing → error`
    pub(crate) fn fail(&mut self, duration_ms: u64) {
        self.status = AgentStatus::Error;
        self.processing_duration_ms = Some(duration_ms);
    }

    /// Back to `pending` with nothing produced; `input` is replaced by `seed`
    pub(crate) fn clear(&mut self, seed: Option<AgentInput>) {
        self.status = AgentStatus::Pending;
        self.input = seed;
        self.output = None;
        self.confidence = None;
        self.started_at = None;
        self.processing_duration_ms = None;
    }

    /// Restore fixture state verbatim (scenario instantiation only)
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn restore(
        &mut self,
        status: AgentStatus,
        input: Option<AgentInput>,
        output: Option<AgentOutput>,
        confidence: Option<u8>,
        started_at: Option<u64>,
        processing_duration_ms: Option<u64>,
    ) {
        self.status = status;
        self.input = input;
        self.output = output;
        self.confidence = confidence;
        self.started_at = started_at;
        self.processing_duration_ms = processing_duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{DocumentType, LiabilityInput, OcrInput};

    #[test]
    fn test_pipeline_order_is_stable() {
        let names: Vec<&str> = AgentKind::PIPELINE.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ocr_parsing",
                "liability_detection",
                "rules_engine",
                "decision_agent",
                "workflow_routing"
            ]
        );
    }

    #[test]
    fn test_offer_input_rejects_other_kind() {
        let mut agent = WorkflowAgent::new("ocr-1", "Document Parser", AgentKind::OcrParsing);
        let wrong = AgentInput::LiabilityDetection(LiabilityInput {
            text: "x".to_string(),
            document_type: DocumentType::ClaimForm,
        });
        assert!(!agent.offer_input(wrong));

        let right = AgentInput::OcrParsing(OcrInput {
            document_url: "/demo-data/pdfs/a.pdf".to_string(),
            document_type: DocumentType::ProviderNote,
            pages: 1,
        });
        assert!(agent.offer_input(right.clone()));
        assert!(!agent.offer_input(right), "input is only set once");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&AgentStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
