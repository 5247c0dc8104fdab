use serde::Deserialize;

/// Snowflake connection settings forwarded to the launcher.
#[derive(Debug, Clone, Default)]
pub struct SnowflakeSection {
    pub account: Option<String>,
    pub user: Option<String>,
    pub pat_token: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub warehouse: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawSnowflakeSection {
    pub account: Option<String>,
    pub user: Option<String>,
    pub pat_token: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub warehouse: Option<String>,
}

pub fn parse_snowflake_section(raw: Option<RawSnowflakeSection>) -> SnowflakeSection {
    let raw = raw.unwrap_or_default();
    SnowflakeSection {
        account: raw.account,
        user: raw.user,
        pat_token: raw.pat_token,
        database: raw.database,
        schema: raw.schema,
        warehouse: raw.warehouse,
    }
}
