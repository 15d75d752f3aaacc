//! Typed stage payloads
//!
//! Each stage kind has exactly one input record and one output record.
//! Both enums are internally tagged by `kind`, so the JSON form of a payload
//! names the stage it belongs to.
//!
//! CRITICAL: money values are i64 cents.

use crate::models::agent::AgentKind;
use serde::{Deserialize, Serialize};

/// Kind of source document fed to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ProviderNote,
    MemberLetter,
    PolicyExcerpt,
    ClaimForm,
}

/// Category of recovery signal detected in a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagType {
    AutoAccident,
    WorkplaceInjury,
    ThirdPartyLiability,
    CoordinationOfBenefits,
}

impl FlagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagType::AutoAccident => "auto_accident",
            FlagType::WorkplaceInjury => "workplace_injury",
            FlagType::ThirdPartyLiability => "third_party_liability",
            FlagType::CoordinationOfBenefits => "coordination_of_benefits",
        }
    }

    /// Human-readable label, e.g. `AUTO ACCIDENT`
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    PursueSubrogation,
    CoordinateBenefits,
    NoAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalDecision {
    FlagForSubrogation,
    FlagForCoordination,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    SubrogationQueue,
    CoordinationQueue,
    StandardProcessing,
}

// ============================================================================
// Inputs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrInput {
    pub document_url: String,
    pub document_type: DocumentType,
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityInput {
    pub text: String,
    pub document_type: DocumentType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesInput {
    pub flag_type: FlagType,
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInput {
    pub recommendation: Recommendation,
    pub priority: Priority,
    /// Cents
    pub estimated_recovery: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingInput {
    pub final_decision: FinalDecision,
    pub reasoning: String,
}

/// Stage input, tagged by stage kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentInput {
    OcrParsing(OcrInput),
    LiabilityDetection(LiabilityInput),
    RulesEngine(RulesInput),
    DecisionAgent(DecisionInput),
    WorkflowRouting(RoutingInput),
}

impl AgentInput {
    pub fn kind(&self) -> AgentKind {
        match self {
            AgentInput::OcrParsing(_) => AgentKind::OcrParsing,
            AgentInput::LiabilityDetection(_) => AgentKind::LiabilityDetection,
            AgentInput::RulesEngine(_) => AgentKind::RulesEngine,
            AgentInput::DecisionAgent(_) => AgentKind::DecisionAgent,
            AgentInput::WorkflowRouting(_) => AgentKind::WorkflowRouting,
        }
    }
}

// ============================================================================
// Outputs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrOutput {
    pub document_url: String,
    pub extracted_text: String,
    /// Fraction in `[0, 1]`
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityOutput {
    pub flag_type: FlagType,
    /// Percentage
    pub confidence: u8,
    pub highlighted_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesOutput {
    pub recommendation: Recommendation,
    pub priority: Priority,
    /// Cents
    pub estimated_recovery: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutput {
    pub final_decision: FinalDecision,
    /// Percentage
    pub confidence: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingOutput {
    pub route: Route,
    pub assigned_reviewer: String,
    pub priority: Priority,
}

/// Stage output, tagged by stage kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentOutput {
    OcrParsing(OcrOutput),
    LiabilityDetection(LiabilityOutput),
    RulesEngine(RulesOutput),
    DecisionAgent(DecisionOutput),
    WorkflowRouting(RoutingOutput),
}

impl AgentOutput {
    pub fn kind(&self) -> AgentKind {
        match self {
            AgentOutput::OcrParsing(_) => AgentKind::OcrParsing,
            AgentOutput::LiabilityDetection(_) => AgentKind::LiabilityDetection,
            AgentOutput::RulesEngine(_) => AgentKind::RulesEngine,
            AgentOutput::DecisionAgent(_) => AgentKind::DecisionAgent,
            AgentOutput::WorkflowRouting(_) => AgentKind::WorkflowRouting,
        }
    }

    /// Input for the next stage, derived from this output
    ///
    /// Routing is the last stage and feeds nothing.
    pub fn downstream_input(&self) -> Option<AgentInput> {
        match self {
            AgentOutput::OcrParsing(o) => Some(AgentInput::LiabilityDetection(LiabilityInput {
                text: o.extracted_text.clone(),
                document_type: DocumentType::ClaimForm,
            })),
            AgentOutput::LiabilityDetection(o) => Some(AgentInput::RulesEngine(RulesInput {
                flag_type: o.flag_type,
                confidence: o.confidence,
            })),
            AgentOutput::RulesEngine(o) => Some(AgentInput::DecisionAgent(DecisionInput {
                recommendation: o.recommendation,
                priority: o.priority,
                estimated_recovery: o.estimated_recovery,
            })),
            AgentOutput::DecisionAgent(o) => Some(AgentInput::WorkflowRouting(RoutingInput {
                final_decision: o.final_decision,
                reasoning: o.reasoning.clone(),
            })),
            AgentOutput::WorkflowRouting(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_json_is_tagged_by_kind() {
        let output = AgentOutput::RulesEngine(RulesOutput {
            recommendation: Recommendation::PursueSubrogation,
            priority: Priority::High,
            estimated_recovery: 850_000,
        });
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "rules_engine");
        assert_eq!(json["recommendation"], "pursue_subrogation");
        assert_eq!(json["estimatedRecovery"], 850_000);
    }

    #[test]
    fn test_downstream_input_targets_next_stage() {
        let output = AgentOutput::LiabilityDetection(LiabilityOutput {
            flag_type: FlagType::AutoAccident,
            confidence: 87,
            highlighted_text: "rear-ended at intersection".to_string(),
        });
        let next = output.downstream_input().unwrap();
        assert_eq!(next.kind(), AgentKind::RulesEngine);
    }

    #[test]
    fn test_flag_label() {
        assert_eq!(FlagType::ThirdPartyLiability.label(), "THIRD PARTY LIABILITY");
    }
}
