//! Workflow simulator engine
//!
//! Owns one [`AgentWorkflow`] and advances it one tick at a time. The driver
//! (a timer in the terminal front end, a loop in tests) calls
//! [`WorkflowSimulator::tick`] at `tick_interval_ms` while the simulator is
//! playing.
//!
//! # Tick
//!
//! ```text
//! 1. Complete every processing stage that has run for >= completion_threshold_ms
//!    (or fail it, with probability failure_probability)
//! 2. If no stage is processing, start the first pending stage
//! 3. If no stage is processing or pending, complete the workflow and stop
//! ```
//!
//! Completing before starting keeps at most one stage processing at any time.
//!
//! # Determinism
//!
//! Time comes from the injected [`Clock`], randomness from a seeded
//! [`RngManager`]. Same seed + same clock readings = identical workflow.
//!
//! # Example
//!
//! ```rust
//! use subrogation_workflow_core::{
//!     AgentStatus, ManualClock, SimulatorConfig, WorkflowSimulator,
//! };
//!
//! let clock = ManualClock::new(1_700_000_000_000);
//! let mut sim = WorkflowSimulator::with_demo(SimulatorConfig::default(), Box::new(clock.clone()))
//!     .unwrap();
//!
//! sim.play();
//! while sim.is_playing() {
//!     sim.tick();
//!     clock.advance(3_000);
//! }
//!
//! assert_eq!(sim.workflow().status(), AgentStatus::Completed);
//! assert_eq!(sim.workflow().current_step(), 5);
//! ```

use crate::catalog::{Scenario, ScenarioCatalog};
use crate::core::time::{elapsed_between, Clock};
use crate::models::{AgentStatus, AgentWorkflow, Event, EventLog, WorkflowStatus};
use crate::rng::RngManager;
use crate::simulator::synth::synthesize_output;
use crate::simulator::view::WorkflowView;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Configuration
// ============================================================================

/// Simulator configuration
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Period of the tick timer
    pub tick_interval_ms: u64,

    /// Period of the display-refresh timer
    pub render_interval_ms: u64,

    /// How long a stage stays processing before it can finish
    pub completion_threshold_ms: u64,

    /// Lowest confidence a finishing stage can draw (percent, inclusive)
    pub confidence_min: u8,

    /// Highest confidence a finishing stage can draw (percent, inclusive)
    pub confidence_max: u8,

    /// Chance that a finishing stage fails instead of completing
    pub failure_probability: f64,

    /// Seed for confidence draws, failures and document selection
    pub rng_seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            render_interval_ms: 1_000,
            completion_threshold_ms: 3_000,
            confidence_min: 80,
            confidence_max: 99,
            failure_probability: 0.0,
            rng_seed: 42,
        }
    }
}

impl SimulatorConfig {
    /// Check ranges and intervals
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.tick_interval_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "tick_interval_ms must be > 0".to_string(),
            ));
        }
        if self.render_interval_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "render_interval_ms must be > 0".to_string(),
            ));
        }
        if self.completion_threshold_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "completion_threshold_ms must be > 0".to_string(),
            ));
        }
        if self.confidence_min > self.confidence_max {
            return Err(SimulationError::InvalidConfig(format!(
                "confidence_min {} exceeds confidence_max {}",
                self.confidence_min, self.confidence_max
            )));
        }
        if self.confidence_max > 100 {
            return Err(SimulationError::InvalidConfig(format!(
                "confidence_max {} exceeds 100",
                self.confidence_max
            )));
        }
        if !(0.0..=1.0).contains(&self.failure_probability) {
            return Err(SimulationError::InvalidConfig(format!(
                "failure_probability {} outside [0, 1]",
                self.failure_probability
            )));
        }
        Ok(())
    }

    /// Parse a JSON config document and validate it
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: SimulatorConfig = serde_json::from_str(json)
            .map_err(|e| SimulationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Errors and results
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

/// What a single tick did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Tick number (unchanged when idle)
    pub tick: usize,

    /// `false` when the simulator was paused or the workflow was terminal
    pub advanced: bool,

    /// Stage started this tick
    pub started: Option<String>,

    /// Stages completed this tick
    pub completed: Vec<String>,

    /// Stage that failed this tick
    pub failed: Option<String>,

    /// Workflow reached `completed` this tick
    pub workflow_completed: bool,
}

impl TickResult {
    fn idle(tick: usize) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Drives one workflow through the pipeline
pub struct WorkflowSimulator {
    config: SimulatorConfig,
    catalog: ScenarioCatalog,

    /// Scenario the current workflow was built from (source of reset inputs)
    scenario: Scenario,
    workflow: AgentWorkflow,

    clock: Box<dyn Clock>,
    rng: RngManager,

    playing: bool,
    tick_count: usize,
    run_id: Uuid,
    event_log: EventLog,
}

impl WorkflowSimulator {
    /// Create a simulator showing the catalog's first scenario
    pub fn new(
        config: SimulatorConfig,
        catalog: ScenarioCatalog,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        let scenario = catalog.first().clone();
        let workflow = scenario.instantiate(clock.now_ms())?;
        let rng = RngManager::new(config.rng_seed);

        let mut sim = Self {
            config,
            catalog,
            scenario,
            workflow,
            clock,
            rng,
            playing: false,
            tick_count: 0,
            run_id: Uuid::new_v4(),
            event_log: EventLog::new(),
        };
        sim.log_selected();
        Ok(sim)
    }

    /// Simulator over the built-in demo catalog
    pub fn with_demo(config: SimulatorConfig, clock: Box<dyn Clock>) -> Result<Self, SimulationError> {
        Self::new(config, ScenarioCatalog::demo(), clock)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn workflow(&self) -> &AgentWorkflow {
        &self.workflow
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Ticks that advanced the current selection
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Identifier of the current run; changes on select and reset
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Read model at the current clock reading
    pub fn view(&self) -> WorkflowView {
        WorkflowView::build(&self.workflow, self.run_id, self.playing, self.now_ms())
    }

    // ========================================================================
    // Controls
    // ========================================================================

    /// Start ticking; no-op on a completed or failed workflow
    ///
    /// Returns whether the simulator is playing afterwards.
    pub fn play(&mut self) -> bool {
        if self.workflow.is_terminal() {
            tracing::warn!(
                workflow_id = self.workflow.id(),
                status = %self.workflow.status(),
                "play ignored: workflow already finished"
            );
            return false;
        }
        if !self.playing {
            self.playing = true;
            let at = self.now_ms();
            self.event_log.log(Event::Played {
                tick: self.tick_count,
                at,
            });
            tracing::info!(workflow_id = self.workflow.id(), "playing");
        }
        true
    }

    /// Stop ticking, keeping progress
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            let at = self.now_ms();
            self.event_log.log(Event::Paused {
                tick: self.tick_count,
                at,
            });
            tracing::info!(workflow_id = self.workflow.id(), "paused");
        }
    }

    /// Return every stage to pending and stop ticking
    pub fn reset(&mut self) {
        self.playing = false;
        let seeds = self.scenario.seeded_inputs();
        for (idx, agent) in self.workflow.agents_mut().iter_mut().enumerate() {
            agent.clear(seeds.get(idx).cloned().flatten());
        }
        self.workflow.clear_run();
        self.run_id = Uuid::new_v4();

        let at = self.now_ms();
        self.event_log.log(Event::Reset {
            tick: self.tick_count,
            at,
            workflow_id: self.workflow.id().to_string(),
        });
        tracing::info!(workflow_id = self.workflow.id(), "reset");
    }

    /// Swap to another catalog scenario, discarding the current run
    ///
    /// An unknown id leaves the simulator untouched.
    pub fn select_workflow(&mut self, id: &str) -> Result<(), SimulationError> {
        let scenario = match self.catalog.find(id) {
            Ok(s) => s.clone(),
            Err(e) => {
                tracing::warn!(id, "select rejected: unknown workflow");
                return Err(e);
            }
        };
        let workflow = scenario.instantiate(self.now_ms())?;

        self.scenario = scenario;
        self.workflow = workflow;
        self.playing = false;
        self.tick_count = 0;
        self.run_id = Uuid::new_v4();
        self.event_log.clear();
        self.log_selected();
        Ok(())
    }

    fn log_selected(&mut self) {
        let at = self.now_ms();
        self.event_log.log(Event::WorkflowSelected {
            tick: self.tick_count,
            at,
            workflow_id: self.workflow.id().to_string(),
            claim_number: self.workflow.claim_number().to_string(),
        });
        tracing::info!(
            workflow_id = self.workflow.id(),
            claim_number = self.workflow.claim_number(),
            status = %self.workflow.status(),
            "workflow selected"
        );
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advance the workflow by one step
    ///
    /// Idle (no mutation) when paused or when the workflow is terminal.
    pub fn tick(&mut self) -> TickResult {
        if !self.playing || self.workflow.is_terminal() {
            return TickResult::idle(self.tick_count);
        }

        self.tick_count += 1;
        let tick = self.tick_count;
        let now = self.now_ms();
        let mut result = TickResult {
            tick,
            advanced: true,
            ..TickResult::default()
        };

        // STEP 1: finish stages that have run long enough
        for idx in 0..self.workflow.agents().len() {
            let agent = &self.workflow.agents()[idx];
            if !agent.is_processing() {
                continue;
            }
            let elapsed = elapsed_between(agent.started_at().unwrap_or(now), now);
            if elapsed < self.config.completion_threshold_ms {
                continue;
            }
            let kind = agent.kind();
            let agent_id = agent.id().to_string();

            if self.rng.chance(self.config.failure_probability) {
                self.workflow.agents_mut()[idx].fail(elapsed);
                self.workflow.set_status(WorkflowStatus::Error);
                self.playing = false;

                self.event_log.log(Event::AgentFailed {
                    tick,
                    at: now,
                    agent_id: agent_id.clone(),
                    kind,
                    duration_ms: elapsed,
                });
                self.event_log.log(Event::WorkflowFailed {
                    tick,
                    at: now,
                    workflow_id: self.workflow.id().to_string(),
                    agent_id: agent_id.clone(),
                });
                tracing::info!(
                    workflow_id = self.workflow.id(),
                    agent_id = %agent_id,
                    "stage failed, workflow stopped"
                );
                result.failed = Some(agent_id);
                return result;
            }

            let confidence = self.rng.range_inclusive(
                u64::from(self.config.confidence_min),
                u64::from(self.config.confidence_max),
            ) as u8;
            let output = synthesize_output(kind, confidence, &mut self.rng);
            self.workflow.agents_mut()[idx].complete(elapsed, confidence, output);

            self.event_log.log(Event::AgentCompleted {
                tick,
                at: now,
                agent_id: agent_id.clone(),
                kind,
                confidence,
                duration_ms: elapsed,
            });
            tracing::debug!(agent_id = %agent_id, %kind, confidence, elapsed, "stage completed");
            result.completed.push(agent_id);
        }

        if self.workflow.processing_count() > 0 {
            self.workflow.set_status(WorkflowStatus::Processing);
            return result;
        }

        // STEP 2: start the next pending stage
        let next = self.workflow.agents().iter().position(|a| a.is_pending());
        match next {
            Some(idx) => {
                self.workflow.stamp_started(now);
                let upstream = idx
                    .checked_sub(1)
                    .and_then(|prev| self.workflow.agents()[prev].output())
                    .and_then(|out| out.downstream_input());

                let agent = &mut self.workflow.agents_mut()[idx];
                if let Some(input) = upstream {
                    agent.offer_input(input);
                }
                agent.begin(now);
                let agent_id = agent.id().to_string();
                let kind = agent.kind();

                self.workflow.set_current_step(idx + 1);
                self.workflow.set_status(WorkflowStatus::Processing);

                self.event_log.log(Event::AgentStarted {
                    tick,
                    at: now,
                    agent_id: agent_id.clone(),
                    kind,
                    step: idx + 1,
                });
                tracing::debug!(agent_id = %agent_id, %kind, step = idx + 1, "stage started");
                result.started = Some(agent_id);
            }
            None => {
                // STEP 3: nothing left to run
                let total = self.workflow.finish(now);
                self.playing = false;

                self.event_log.log(Event::WorkflowCompleted {
                    tick,
                    at: now,
                    workflow_id: self.workflow.id().to_string(),
                    total_duration_ms: total,
                });
                tracing::info!(
                    workflow_id = self.workflow.id(),
                    total_duration_ms = total,
                    average_confidence = ?self.workflow.average_confidence(),
                    "workflow completed"
                );
                result.workflow_completed = true;
            }
        }

        debug_assert!(self.workflow.processing_count() <= 1);
        result
    }

    /// Stage statuses in pipeline order
    pub fn statuses(&self) -> Vec<AgentStatus> {
        self.workflow.agents().iter().map(|a| a.status()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ManualClock;

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulatorConfig {
            confidence_min: 99,
            confidence_max: 80,
            ..SimulatorConfig::default()
        };
        let result = WorkflowSimulator::with_demo(config, Box::new(ManualClock::new(0)));
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_tick_while_paused_is_idle() {
        let mut sim =
            WorkflowSimulator::with_demo(SimulatorConfig::default(), Box::new(ManualClock::new(0)))
                .unwrap();
        let result = sim.tick();
        assert!(!result.advanced);
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.workflow().current_step(), 0);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = SimulatorConfig::from_json(r#"{"rng_seed": 7, "tick_interval_ms": 250}"#)
            .unwrap();
        assert_eq!(config.rng_seed, 7);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.completion_threshold_ms, 3_000);
    }

    #[test]
    fn test_config_from_json_rejects_unknown_keys() {
        assert!(SimulatorConfig::from_json(r#"{"speed": 2}"#).is_err());
    }
}
