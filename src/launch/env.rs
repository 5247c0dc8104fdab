//! Fixed-order mapping from config fields to launcher env assignments.

use crate::config::LaunchConfig;

/// One `KEY=value` pair handed to the launcher via `--env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub name: &'static str,
    pub value: String,
}

impl EnvAssignment {
    pub fn render(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Collect one assignment per recognized field that is present and truthy.
///
/// Order follows the fixed field enumeration below, not the order the
/// source document happens to use.
pub fn collect_env_assignments(config: &LaunchConfig) -> Vec<EnvAssignment> {
    let mut assignments = Vec::new();

    push_text(&mut assignments, "SNOWFLAKE_ACCOUNT", &config.snowflake.account);
    push_text(&mut assignments, "SNOWFLAKE_USER", &config.snowflake.user);
    push_text(
        &mut assignments,
        "SNOWFLAKE_PAT_TOKEN",
        &config.snowflake.pat_token,
    );
    push_text(
        &mut assignments,
        "SNOWFLAKE_DATABASE",
        &config.snowflake.database,
    );
    push_text(&mut assignments, "SNOWFLAKE_SCHEMA", &config.snowflake.schema);
    push_text(
        &mut assignments,
        "SNOWFLAKE_WAREHOUSE",
        &config.snowflake.warehouse,
    );
    push_text(&mut assignments, "MCP_SERVER_NAME", &config.mcp.server_name);
    push_text(
        &mut assignments,
        "AWS_PLACE_INDEX_NAME",
        &config.aws.place_index_name,
    );
    push_text(&mut assignments, "AGENT_MODEL", &config.agent.model);
    push_count(
        &mut assignments,
        "AGENT_MAX_HISTORY_TURNS",
        config.agent.max_history_turns,
    );

    assignments
}

fn push_text(assignments: &mut Vec<EnvAssignment>, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            assignments.push(EnvAssignment {
                name,
                value: value.clone(),
            });
        }
    }
}

// A zero count counts as unset, matching the empty-string rule for text fields.
fn push_count(assignments: &mut Vec<EnvAssignment>, name: &'static str, value: Option<u32>) {
    if let Some(value) = value {
        if value != 0 {
            assignments.push(EnvAssignment {
                name,
                value: value.to_string(),
            });
        }
    }
}
