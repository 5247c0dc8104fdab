//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_path, LaunchProfile, RunMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Build and run an `agentcore launch` invocation from config.yaml",
    long_about = None
)]
pub struct LaunchArgs {
    /// Print the launch command without prompting or executing it.
    #[arg(long = "no-confirm", default_value_t = false)]
    pub no_confirm: bool,
    /// Path to config.yaml (overrides AGENTCORE_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;
        let mode = if self.no_confirm {
            RunMode::PrintOnly
        } else {
            RunMode::Interactive
        };

        Ok(LaunchProfile { config_path, mode })
    }
}
