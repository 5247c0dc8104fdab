//! Assemble and run the external launcher invocation.

pub mod command;
pub mod env;
pub mod runner;

pub use command::{LaunchCommand, LAUNCHER_PROGRAM, LAUNCH_SUBCOMMAND};
pub use env::{collect_env_assignments, EnvAssignment};
