use serde::Deserialize;

/// Snowflake-managed MCP server settings.
#[derive(Debug, Clone, Default)]
pub struct McpSection {
    pub server_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawMcpSection {
    pub server_name: Option<String>,
}

pub fn parse_mcp_section(raw: Option<RawMcpSection>) -> McpSection {
    let raw = raw.unwrap_or_default();
    McpSection {
        server_name: raw.server_name,
    }
}
