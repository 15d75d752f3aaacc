//! Workflow simulator
//!
//! See `engine.rs` for the tick loop, `synth.rs` for stage outputs and
//! `view.rs` for the derived read model.

pub mod engine;
pub mod synth;
pub mod view;

pub use engine::{SimulationError, SimulatorConfig, TickResult, WorkflowSimulator};
pub use view::{format_clock, format_processing_time, format_timestamp, AgentView, WorkflowView};
