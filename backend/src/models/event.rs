//! Event logging for workflow runs
//!
//! Every state change the simulator makes is recorded as an [`Event`].
//! The log is what the terminal driver prints as a timeline, and what the
//! tests inspect to check that a transition happened exactly once.
//!
//! # Example
//!
//! ```rust
//! use subrogation_workflow_core::models::{AgentKind, Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::AgentStarted {
//!     tick: 1,
//!     at: 1_000,
//!     agent_id: "ocr-001".to_string(),
//!     kind: AgentKind::OcrParsing,
//!     step: 1,
//! });
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events()[0].event_type(), "agent_started");
//! ```

use crate::models::agent::AgentKind;
use serde::Serialize;

/// Simulator event
///
/// `tick` counts `tick()` calls that advanced the run (0 for control
/// operations issued before the first one); `at` is the clock reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    WorkflowSelected {
        tick: usize,
        at: u64,
        workflow_id: String,
        claim_number: String,
    },

    Played {
        tick: usize,
        at: u64,
    },

    Paused {
        tick: usize,
        at: u64,
    },

    Reset {
        tick: usize,
        at: u64,
        workflow_id: String,
    },

    AgentStarted {
        tick: usize,
        at: u64,
        agent_id: String,
        kind: AgentKind,
        /// 1-based pipeline position
        step: usize,
    },

    AgentCompleted {
        tick: usize,
        at: u64,
        agent_id: String,
        kind: AgentKind,
        confidence: u8,
        duration_ms: u64,
    },

    AgentFailed {
        tick: usize,
        at: u64,
        agent_id: String,
        kind: AgentKind,
        duration_ms: u64,
    },

    WorkflowCompleted {
        tick: usize,
        at: u64,
        workflow_id: String,
        total_duration_ms: u64,
    },

    WorkflowFailed {
        tick: usize,
        at: u64,
        workflow_id: String,
        agent_id: String,
    },
}

impl Event {
    pub fn tick(&self) -> usize {
        match self {
            Event::WorkflowSelected { tick, .. }
            | Event::Played { tick, .. }
            | Event::Paused { tick, .. }
            | Event::Reset { tick, .. }
            | Event::AgentStarted { tick, .. }
            | Event::AgentCompleted { tick, .. }
            | Event::AgentFailed { tick, .. }
            | Event::WorkflowCompleted { tick, .. }
            | Event::WorkflowFailed { tick, .. } => *tick,
        }
    }

    pub fn at(&self) -> u64 {
        match self {
            Event::WorkflowSelected { at, .. }
            | Event::Played { at, .. }
            | Event::Paused { at, .. }
            | Event::Reset { at, .. }
            | Event::AgentStarted { at, .. }
            | Event::AgentCompleted { at, .. }
            | Event::AgentFailed { at, .. }
            | Event::WorkflowCompleted { at, .. }
            | Event::WorkflowFailed { at, .. } => *at,
        }
    }

    /// Snake-case event name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::WorkflowSelected { .. } => "workflow_selected",
            Event::Played { .. } => "played",
            Event::Paused { .. } => "paused",
            Event::Reset { .. } => "reset",
            Event::AgentStarted { .. } => "agent_started",
            Event::AgentCompleted { .. } => "agent_completed",
            Event::AgentFailed { .. } => "agent_failed",
            Event::WorkflowCompleted { .. } => "workflow_completed",
            Event::WorkflowFailed { .. } => "workflow_failed",
        }
    }
}

/// Append-only event log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events recorded during `tick`
    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Events of one type, e.g. `"agent_completed"`
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}
