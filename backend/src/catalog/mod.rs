//! Demo scenario catalog
//!
//! The fixed set of workflows a user can pick from, plus the claim,
//! review-queue and impact fixtures the other views render.
//!
//! Scenario timestamps are stored as offsets ("started 15 s ago") and
//! resolved against the simulator clock when a scenario is instantiated.

mod claims;
mod exceptions;
mod impact;

pub use claims::demo_claims;
pub use exceptions::demo_exception_cases;
pub use impact::demo_impact_breakdown;

use crate::models::{AgentInput, AgentOutput, AgentStatus, AgentWorkflow, WorkflowStatus};
use crate::simulator::SimulationError;

/// Seeded state of one pipeline stage
#[derive(Debug, Clone, Default)]
pub struct ScenarioStage {
    pub status: AgentStatus,
    pub input: Option<AgentInput>,
    pub output: Option<AgentOutput>,
    pub confidence: Option<u8>,
    /// How long before instantiation the stage started
    pub started_ago_ms: Option<u64>,
    pub processing_duration_ms: Option<u64>,
}

impl ScenarioStage {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn pending_with_input(input: AgentInput) -> Self {
        Self {
            input: Some(input),
            ..Self::default()
        }
    }
}

/// A selectable demo workflow
#[derive(Debug, Clone)]
pub struct Scenario {
    pub workflow_id: String,
    pub claim_id: String,
    pub claim_number: String,
    /// Suffix for stage ids (`ocr-<suffix>`, ...)
    pub stage_suffix: String,
    pub started_ago_ms: Option<u64>,
    pub current_step: usize,
    /// One entry per pipeline stage, in pipeline order
    pub stages: Vec<ScenarioStage>,
}

impl Scenario {
    /// Build the live workflow, resolving offsets against `now`
    pub fn instantiate(&self, now: u64) -> Result<AgentWorkflow, SimulationError> {
        self.validate()?;

        let mut workflow = AgentWorkflow::new(
            &self.workflow_id,
            &self.claim_id,
            &self.claim_number,
            &self.stage_suffix,
        );
        for (agent, stage) in workflow.agents_mut().iter_mut().zip(&self.stages) {
            agent.restore(
                stage.status,
                stage.input.clone(),
                stage.output.clone(),
                stage.confidence,
                stage.started_ago_ms.map(|ago| now.saturating_sub(ago)),
                stage.processing_duration_ms,
            );
        }
        workflow.set_current_step(self.current_step);
        workflow.set_started_at(self.started_ago_ms.map(|ago| now.saturating_sub(ago)));
        workflow.set_status(derive_status(&workflow));
        Ok(workflow)
    }

    /// Inputs the fixture provides up front, per stage
    pub fn seeded_inputs(&self) -> Vec<Option<AgentInput>> {
        self.stages.iter().map(|s| s.input.clone()).collect()
    }

    fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |msg: String| {
            Err(SimulationError::InvalidScenario(format!(
                "{}: {}",
                self.workflow_id, msg
            )))
        };

        let expected = crate::models::AgentKind::PIPELINE;
        if self.stages.len() != expected.len() {
            return invalid(format!(
                "expected {} stages, found {}",
                expected.len(),
                self.stages.len()
            ));
        }
        if self.current_step > expected.len() {
            return invalid(format!("current_step {} out of range", self.current_step));
        }

        let processing = self
            .stages
            .iter()
            .filter(|s| s.status == AgentStatus::Processing)
            .count();
        if processing > 1 {
            return invalid(format!("{} stages processing at once", processing));
        }

        for (stage, kind) in self.stages.iter().zip(expected.iter()) {
            if let Some(input) = &stage.input {
                if input.kind() != *kind {
                    return invalid(format!("{} input seeded on {} stage", input.kind(), kind));
                }
            }
            if let Some(output) = &stage.output {
                if output.kind() != *kind {
                    return invalid(format!(
                        "{} output seeded on {} stage",
                        output.kind(),
                        kind
                    ));
                }
            }
            if stage.status == AgentStatus::Processing && stage.started_ago_ms.is_none() {
                return invalid(format!("processing {} stage has no start time", kind));
            }
        }
        Ok(())
    }
}

/// Workflow status implied by its stages
pub(crate) fn derive_status(workflow: &AgentWorkflow) -> WorkflowStatus {
    let agents = workflow.agents();
    if agents.iter().any(|a| a.status() == AgentStatus::Error) {
        AgentStatus::Error
    } else if !agents.is_empty() && agents.iter().all(|a| a.is_completed()) {
        AgentStatus::Completed
    } else if agents.iter().any(|a| a.is_processing() || a.is_completed()) {
        AgentStatus::Processing
    } else {
        AgentStatus::Pending
    }
}

/// Fixed list of selectable scenarios
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, SimulationError> {
        if scenarios.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "scenario catalog must not be empty".to_string(),
            ));
        }
        for scenario in &scenarios {
            scenario.validate()?;
        }
        Ok(Self { scenarios })
    }

    /// The two demo scenarios
    pub fn demo() -> Self {
        Self {
            scenarios: demo_scenarios(),
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn first(&self) -> &Scenario {
        // `new` and `demo` both guarantee at least one scenario.
        &self.scenarios[0]
    }

    /// Look up by workflow id (`workflow-001`) or claim number (`SUB-2024-001`)
    pub fn find(&self, id: &str) -> Result<&Scenario, SimulationError> {
        self.scenarios
            .iter()
            .find(|s| s.workflow_id == id || s.claim_number == id)
            .ok_or_else(|| SimulationError::UnknownWorkflow(id.to_string()))
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

fn demo_scenarios() -> Vec<Scenario> {
    use crate::models::{DocumentType, LiabilityInput, OcrInput, OcrOutput};

    let fresh = Scenario {
        workflow_id: "workflow-001".to_string(),
        claim_id: "claim-001".to_string(),
        claim_number: "SUB-2024-001".to_string(),
        stage_suffix: "001".to_string(),
        started_ago_ms: None,
        current_step: 0,
        stages: vec![
            ScenarioStage::pending_with_input(AgentInput::OcrParsing(OcrInput {
                document_url: "/demo-data/pdfs/Provider_Claim_Note_AutoAccident.pdf".to_string(),
                document_type: DocumentType::ProviderNote,
                pages: 3,
            })),
            ScenarioStage::pending(),
            ScenarioStage::pending(),
            ScenarioStage::pending(),
            ScenarioStage::pending(),
        ],
    };

    let in_flight = Scenario {
        workflow_id: "workflow-002".to_string(),
        claim_id: "claim-002".to_string(),
        claim_number: "SUB-2024-002".to_string(),
        stage_suffix: "002".to_string(),
        started_ago_ms: Some(67_000),
        current_step: 2,
        stages: vec![
            ScenarioStage {
                status: AgentStatus::Completed,
                input: Some(AgentInput::OcrParsing(OcrInput {
                    document_url: "/demo-data/pdfs/Member_Letter_WorkplaceAccident.pdf"
                        .to_string(),
                    document_type: DocumentType::MemberLetter,
                    pages: 2,
                })),
                output: Some(AgentOutput::OcrParsing(OcrOutput {
                    document_url: "/demo-data/pdfs/Member_Letter_WorkplaceAccident.pdf"
                        .to_string(),
                    extracted_text: "Injured at workplace during shift...".to_string(),
                    confidence: 0.94,
                })),
                confidence: None,
                started_ago_ms: Some(67_000),
                processing_duration_ms: Some(52_000),
            },
            ScenarioStage {
                status: AgentStatus::Processing,
                input: Some(AgentInput::LiabilityDetection(LiabilityInput {
                    text: "Injured at workplace during shift...".to_string(),
                    document_type: DocumentType::ClaimForm,
                })),
                started_ago_ms: Some(15_000),
                ..ScenarioStage::default()
            },
            ScenarioStage::pending(),
            ScenarioStage::pending(),
            ScenarioStage::pending(),
        ],
    };

    vec![fresh, in_flight]
}
