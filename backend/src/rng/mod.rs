//! Deterministic random number generation
//!
//! Confidence scores, simulated failures and demo document selection all draw
//! from this module. Nothing in the simulator touches a thread-local RNG.

mod xorshift;

pub use xorshift::RngManager;
