//! Telemetry initialization and launch plan logging.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and route developer logs to stderr.
///
/// Stdout is reserved for the command text and operator prompts.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging the resolved launch plan as structured telemetry.
#[derive(Debug)]
pub struct LaunchPlanTelemetry<'a> {
    pub config_path: &'a str,
    pub assignment_count: usize,
    pub mode: &'a str,
}

/// Emit the resolved launch plan to `tracing`.
pub fn emit_launch_plan(telemetry: &LaunchPlanTelemetry<'_>) {
    info!(
        target: "agentcore_launch::runtime",
        config_path = telemetry.config_path,
        assignment_count = telemetry.assignment_count,
        mode = telemetry.mode,
        "Resolved launch command"
    );
}
