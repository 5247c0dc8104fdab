//! Entry point for `agentcore-launch`.
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;

use agentcore_launch::{
    cli::{LaunchArgs, RunMode},
    config::LaunchConfig,
    errors::RunnerExit,
    launch::{collect_env_assignments, runner, LaunchCommand},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RunnerExit> {
    telemetry::init_tracing().map_err(RunnerExit::from_error)?;
    let args = LaunchArgs::parse();
    let profile = args.into_profile().map_err(RunnerExit::from_error)?;

    let config = LaunchConfig::load_from_path(profile.config_path.clone())
        .map_err(|err| RunnerExit::from_error(Error::new(err)))?;
    let assignments = collect_env_assignments(&config);
    let command = LaunchCommand::from_assignments(&assignments);

    telemetry::emit_launch_plan(&telemetry::LaunchPlanTelemetry {
        config_path: config.source_path.to_string_lossy().as_ref(),
        assignment_count: assignments.len(),
        mode: profile.mode.as_str(),
    });

    match profile.mode {
        RunMode::PrintOnly => {
            println!("{}", command.shell_display());
            Ok(())
        }
        RunMode::Interactive => runner::run_interactive(&command)
            .await
            .map_err(RunnerExit::from_error),
    }
}
