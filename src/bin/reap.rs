//! Entry point for `agentcore-reap`.
use std::process::ExitCode;

use console::style;

use agentcore_launch::{reaper, telemetry};

fn main() -> ExitCode {
    // The reaper always reports success, even if telemetry fails to start.
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err:?}");
    }

    let outcome = reaper::reap_launcher_processes();
    let line = reaper::summary(&outcome);
    if outcome.matched == 0 {
        println!("{}", style(line).dim());
    } else {
        println!("{}", style(line).green());
    }

    ExitCode::SUCCESS
}
