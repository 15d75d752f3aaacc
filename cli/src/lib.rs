//! Terminal driver for the subrogation workflow simulator
//!
//! The binary (`subro-demo`) is a thin clap front end over these modules so
//! the command paths can be exercised from tests.

pub mod clock;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod runner;

pub use clock::TokioClock;
pub use config::ConfigArgs;
pub use runner::{run_realtime, RunOutcome, RunReport};
