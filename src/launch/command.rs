//! Shared helpers for building `agentcore launch` commands.

use std::process::Stdio;

use tokio::process::Command;

use super::env::EnvAssignment;

/// External launcher executable.
pub const LAUNCHER_PROGRAM: &str = "agentcore";
/// Launcher subcommand this tool drives.
pub const LAUNCH_SUBCOMMAND: &str = "launch";

/// A fully assembled launcher invocation.
///
/// Held as an argument vector so the spawn path never routes config values
/// back through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    args: Vec<String>,
}

impl LaunchCommand {
    /// Build the invocation, appending `--env KEY=value` per assignment.
    ///
    /// Assignments with empty values are skipped here as well.
    pub fn from_assignments(assignments: &[EnvAssignment]) -> Self {
        let mut args = vec![LAUNCH_SUBCOMMAND.to_string()];
        for assignment in assignments {
            if assignment.value.is_empty() {
                continue;
            }
            args.push("--env".to_string());
            args.push(assignment.render());
        }

        Self { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Single-line rendering used for display and manual copy/paste.
    pub fn shell_display(&self) -> String {
        let mut rendered = String::from(LAUNCHER_PROGRAM);
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }

    /// Spawnable process with the operator's standard streams inherited.
    pub fn build_process(&self) -> Command {
        let mut command = Command::new(LAUNCHER_PROGRAM);
        command.args(&self.args);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}
