//! Library crate root for the agentcore launch helpers.

pub mod cli;
pub mod config;
pub mod errors;
pub mod launch;
pub mod reaper;
pub mod telemetry;
