use serde::Deserialize;

/// AWS settings used by the launched agent.
#[derive(Debug, Clone, Default)]
pub struct AwsSection {
    pub place_index_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAwsSection {
    pub place_index_name: Option<String>,
}

pub fn parse_aws_section(raw: Option<RawAwsSection>) -> AwsSection {
    let raw = raw.unwrap_or_default();
    AwsSection {
        place_index_name: raw.place_index_name,
    }
}
