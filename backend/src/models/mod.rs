//! Domain models for the workflow simulator

pub mod agent;
pub mod event;
pub mod payload;
pub mod workflow;

// Re-exports
pub use agent::{AgentKind, AgentStatus, WorkflowAgent};
pub use event::{Event, EventLog};
pub use payload::{
    AgentInput, AgentOutput, DecisionInput, DecisionOutput, DocumentType, FinalDecision, FlagType,
    LiabilityInput, LiabilityOutput, OcrInput, OcrOutput, Priority, Recommendation, Route,
    RoutingInput, RoutingOutput, RulesInput, RulesOutput,
};
pub use workflow::{AgentWorkflow, WorkflowStatus};
