//! LaunchProfile and config path resolution.
use std::{
    env,
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::config::telemetry::log_env_source;

pub const DEFAULT_CONFIG: &str = "config.yaml";
pub const CONFIG_PATH_ENV: &str = "AGENTCORE_CONFIG_PATH";

/// How the builder disposes of the constructed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Show the command and ask for confirmation before executing it.
    Interactive,
    /// Print the command to stdout and stop; nothing is executed.
    PrintOnly,
}

impl RunMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RunMode::Interactive => "interactive",
            RunMode::PrintOnly => "print_only",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub mode: RunMode,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path,
        None => match env::var_os(CONFIG_PATH_ENV) {
            Some(value) if !value.is_empty() => {
                let path = PathBuf::from(value);
                log_env_source(&path, true);
                path
            }
            _ => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                log_env_source(&path, false);
                path
            }
        },
    };

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
