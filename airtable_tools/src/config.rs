use log::*;
use ob_common::Secret;

#[derive(Debug, Clone, Default)]
pub struct AirtableConfig {
    /// The base the bridge writes into, e.g. "appEi4vycnztbqDzQ".
    pub base_id: String,
    pub api_key: Secret<String>,
    pub api_version: String,
}

impl AirtableConfig {
    pub fn new_from_env_or_default() -> Self {
        let base_id = std::env::var("OB_AIRTABLE_BASE_ID").unwrap_or_else(|_| {
            warn!("🗂️ OB_AIRTABLE_BASE_ID not set, using (probably useless) default");
            "app00000000000000".to_string()
        });
        let api_version = std::env::var("OB_AIRTABLE_API_VERSION").unwrap_or_else(|_| {
            warn!("🗂️ OB_AIRTABLE_API_VERSION not set, using v0 as default");
            "v0".to_string()
        });
        let api_key = Secret::new(std::env::var("OB_AIRTABLE_API_KEY").unwrap_or_else(|_| {
            warn!("🗂️ OB_AIRTABLE_API_KEY not set, using (probably useless) default");
            "pat00000000000000".to_string()
        }));
        Self { base_id, api_key, api_version }
    }
}
