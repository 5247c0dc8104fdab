use tracing::{debug, info};

use crate::cli::profile::{CONFIG_PATH_ENV, DEFAULT_CONFIG};

use super::LaunchConfig;

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "agentcore_launch::config",
            path = %path.display(),
            "Loading configuration using AGENTCORE_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "agentcore_launch::config",
            path = %path.display(),
            env = CONFIG_PATH_ENV,
            default = DEFAULT_CONFIG,
            "AGENTCORE_CONFIG_PATH not set; using default config.yaml"
        );
    }
}

pub fn log_loaded(config: &LaunchConfig) {
    info!(
        target: "agentcore_launch::config",
        path = %config.source_path.display(),
        snowflake_account = config.snowflake.account.is_some(),
        mcp_server_name = config.mcp.server_name.is_some(),
        aws_place_index_name = config.aws.place_index_name.is_some(),
        agent_model = config.agent.model.is_some(),
        "Configuration file loaded successfully"
    );
}
