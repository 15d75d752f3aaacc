//! Subrogation Workflow Core - Rust Engine
//!
//! Deterministic simulation of the five-stage claim pipeline (document
//! parsing, liability detection, rules, decision, routing) behind the
//! subrogation demo, plus the claims dashboard, review queue and document
//! viewer logic around it.
//!
//! # Architecture
//!
//! - **core**: Injected clock
//! - **rng**: Deterministic random number generation
//! - **models**: Domain types (WorkflowAgent, AgentWorkflow, payloads, events)
//! - **catalog**: Demo scenarios and fixtures
//! - **simulator**: Tick engine, output synthesis, read model
//! - **claims**: Dashboard filtering and summary
//! - **review**: Human-review queue
//! - **document**: Document viewer and highlight spans
//! - **impact**: Business impact breakdown
//!
//! # Critical Invariants
//!
//! 1. At most one stage is processing at any time
//! 2. All randomness is deterministic (seeded RNG)
//! 3. All time comes from the injected clock
//! 4. All money values are i64 (cents)

pub mod catalog;
pub mod claims;
pub mod core;
pub mod document;
pub mod impact;
pub mod models;
pub mod review;
pub mod rng;
pub mod simulator;

// Re-exports for convenience
pub use catalog::{Scenario, ScenarioCatalog, ScenarioStage};
pub use claims::{filter_claims, Claim, ClaimFilter, ClaimStatus, ClaimSummary};
pub use crate::core::time::{Clock, ManualClock, SystemClock};
pub use document::{DocumentRef, DocumentViewer, TextHighlight, ViewMode};
pub use impact::{ImpactBreakdown, ImpactItem, ImpactLine};
pub use models::{
    agent::{AgentKind, AgentStatus, WorkflowAgent},
    event::{Event, EventLog},
    payload::{AgentInput, AgentOutput},
    workflow::{AgentWorkflow, WorkflowStatus},
};
pub use review::{ExceptionCase, ReviewDecision, ReviewError, ReviewQueue, ReviewStatus, ReviewSubmission};
pub use rng::RngManager;
pub use simulator::{
    SimulationError, SimulatorConfig, TickResult, WorkflowSimulator, WorkflowView,
};
