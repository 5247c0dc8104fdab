//! Load the launch configuration from `config.yaml`.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::errors::ConfigError;

pub mod agent;
pub mod aws;
pub mod mcp;
pub mod snowflake;
pub mod telemetry;

pub use agent::{parse_agent_section, AgentSection, RawAgentSection};
pub use aws::{parse_aws_section, AwsSection, RawAwsSection};
pub use mcp::{parse_mcp_section, McpSection, RawMcpSection};
pub use snowflake::{parse_snowflake_section, RawSnowflakeSection, SnowflakeSection};

/// Top-level configuration container.
///
/// All four sections are optional; an absent section behaves like an empty
/// one. Unknown keys anywhere in the document are ignored.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub snowflake: SnowflakeSection,
    pub mcp: McpSection,
    pub aws: AwsSection,
    pub agent: AgentSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawLaunchConfig {
    snowflake: Option<RawSnowflakeSection>,
    mcp: Option<RawMcpSection>,
    aws: Option<RawAwsSection>,
    agent: Option<RawAgentSection>,
}

impl LaunchConfig {
    /// Load configuration from a specific path.
    ///
    /// A missing file is reported before any parsing is attempted.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "agentcore_launch::config",
            path = %path.display(),
            "Starting configuration load"
        );

        if !path.is_file() {
            let error = ConfigError::NotFound { path: path.clone() };
            error!(
                target: "agentcore_launch::config",
                path = %path.display(),
                "Configuration file not found"
            );
            return Err(error);
        }

        let builder = ::config::Config::builder()
            .add_source(::config::File::from(path.clone()).format(::config::FileFormat::Yaml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "agentcore_launch::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLaunchConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "agentcore_launch::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path);
        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLaunchConfig, path: PathBuf) -> Self {
        Self {
            snowflake: parse_snowflake_section(raw.snowflake),
            mcp: parse_mcp_section(raw.mcp),
            aws: parse_aws_section(raw.aws),
            agent: parse_agent_section(raw.agent),
            source_path: path,
        }
    }
}
