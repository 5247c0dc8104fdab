//! Find and terminate stray launcher processes.

use sysinfo::{Signal, System};
use tracing::{debug, info};

/// Substring matched against each process command line.
pub const LAUNCHER_CMDLINE_PATTERN: &str = "agentcore launch";

/// Summary of one reap pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReapOutcome {
    pub matched: usize,
    pub terminated: Vec<u32>,
}

/// Terminate every process whose command line contains the launcher pattern.
///
/// Finding nothing is a normal outcome, never an error.
pub fn reap_launcher_processes() -> ReapOutcome {
    let system = System::new_all();
    let own_pid = sysinfo::get_current_pid().ok();

    let mut outcome = ReapOutcome::default();
    for (pid, process) in system.processes() {
        if Some(*pid) == own_pid {
            continue;
        }
        if !matches_launcher_cmdline(process.cmd()) {
            continue;
        }

        outcome.matched += 1;
        let signalled = process
            .kill_with(Signal::Term)
            .unwrap_or_else(|| process.kill());
        if signalled {
            info!(
                target: "agentcore_launch::reaper",
                pid = pid.as_u32(),
                "Sent termination signal to launcher process"
            );
            outcome.terminated.push(pid.as_u32());
        } else {
            debug!(
                target: "agentcore_launch::reaper",
                pid = pid.as_u32(),
                "Launcher process refused the termination signal"
            );
        }
    }

    info!(
        target: "agentcore_launch::reaper",
        matched = outcome.matched,
        terminated = outcome.terminated.len(),
        "Reap pass complete"
    );
    outcome
}

/// User-facing summary line for a reap pass.
///
/// Process details and counts stay in the tracing output; stdout only says
/// whether anything matched.
pub fn summary(outcome: &ReapOutcome) -> &'static str {
    if outcome.matched == 0 {
        "No running `agentcore launch` processes found."
    } else {
        "Terminated matching `agentcore launch` processes."
    }
}

/// Match the joined argv against the fixed launcher pattern.
pub fn matches_launcher_cmdline(cmd: &[String]) -> bool {
    if cmd.is_empty() {
        return false;
    }
    cmd.join(" ").contains(LAUNCHER_CMDLINE_PATTERN)
}
