//! Interactive confirmation and launcher execution.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use super::command::{LaunchCommand, LAUNCHER_PROGRAM};

/// Show the command, ask for confirmation, then run or cancel.
///
/// Cancellation is a normal outcome and exits successfully.
pub async fn run_interactive(command: &LaunchCommand) -> Result<()> {
    print_launch_banner(command);

    let confirmed = {
        let stdin = io::stdin();
        prompt_confirmation(&mut stdin.lock())?
    };

    if !confirmed {
        print_cancellation(command);
        return Ok(());
    }

    spawn_launcher(command).await
}

fn print_launch_banner(command: &LaunchCommand) {
    println!("{}", style("Launch command").cyan().bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style(command.shell_display()).green());
    println!("{}", style("─".repeat(60)).dim());
}

fn prompt_confirmation(input: &mut impl BufRead) -> Result<bool> {
    print!("{} ", style("Launch now? [y/N]").yellow().bold());
    io::stdout().flush().context("failed to flush prompt")?;
    read_confirmation(input).context("failed to read confirmation input")
}

/// Only a single case-insensitive `y` confirms; everything else cancels.
fn read_confirmation(input: &mut impl BufRead) -> io::Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn print_cancellation(command: &LaunchCommand) {
    println!("{}", style("Launch cancelled.").red());
    println!("Run it manually with:");
    println!("  {}", command.shell_display());
}

async fn spawn_launcher(command: &LaunchCommand) -> Result<()> {
    info!(
        target: "agentcore_launch::runner",
        command = %command.shell_display(),
        "Starting launcher"
    );

    let mut child = command.build_process().spawn().map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            anyhow::anyhow!("`{LAUNCHER_PROGRAM}` executable not found on PATH")
        } else {
            anyhow::Error::new(err).context(format!("failed to spawn `{LAUNCHER_PROGRAM}`"))
        }
    })?;
    let status = child
        .wait()
        .await
        .context("failed to wait for launcher process")?;

    info!(
        target: "agentcore_launch::runner",
        exit_code = status.code(),
        "Launcher process exited"
    );
    Ok(())
}
