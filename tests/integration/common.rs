use std::{path::PathBuf, process::Stdio};

use anyhow::{Context, Result};
use tokio::{io::AsyncWriteExt, process::Command};

pub const LAUNCH_BINARY: &str = env!("CARGO_BIN_EXE_agentcore-launch");
pub const REAP_BINARY: &str = env!("CARGO_BIN_EXE_agentcore-reap");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

pub struct CommandOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run the launch binary with piped stdio and optional confirmation input.
pub async fn run_launch(args: &[&str], stdin_input: Option<&str>) -> Result<CommandOutput> {
    collect_output(launch_command(args), stdin_input).await
}

/// Same as `run_launch`, but with the child's `PATH` replaced so the test
/// controls which `agentcore` executable (if any) can be found.
pub async fn run_launch_with_path(
    args: &[&str],
    stdin_input: Option<&str>,
    path: &str,
) -> Result<CommandOutput> {
    let mut command = launch_command(args);
    command.env("PATH", path);
    collect_output(command, stdin_input).await
}

fn launch_command(args: &[&str]) -> Command {
    let mut command = Command::new(LAUNCH_BINARY);
    command
        .args(args)
        .env_remove("AGENTCORE_CONFIG_PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

async fn collect_output(mut command: Command, stdin_input: Option<&str>) -> Result<CommandOutput> {
    let mut child = command.spawn().context("failed to spawn agentcore-launch")?;

    if let Some(input) = stdin_input {
        let mut stdin = child.stdin.take().context("child stdin unavailable")?;
        stdin
            .write_all(input.as_bytes())
            .await
            .context("failed to write confirmation input")?;
    }
    drop(child.stdin.take());

    let output = child
        .wait_with_output()
        .await
        .context("failed to collect agentcore-launch output")?;
    Ok(CommandOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
