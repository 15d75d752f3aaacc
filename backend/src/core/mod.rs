//! Core infrastructure: time

pub mod time;
