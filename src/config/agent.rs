use serde::Deserialize;

/// Agent runtime settings.
#[derive(Debug, Clone, Default)]
pub struct AgentSection {
    pub model: Option<String>,
    pub max_history_turns: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAgentSection {
    pub model: Option<String>,
    pub max_history_turns: Option<u32>,
}

pub fn parse_agent_section(raw: Option<RawAgentSection>) -> AgentSection {
    let raw = raw.unwrap_or_default();
    AgentSection {
        model: raw.model,
        max_history_turns: raw.max_history_turns,
    }
}
