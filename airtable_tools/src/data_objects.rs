use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record, as the Airtable REST API returns it from a create call.
///
/// `fields` echoes the cell values the store accepted; the bridge only ever consumes `id`, which is
/// the store-generated record identifier used for link fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AirtableRecord {
    pub id: String,
    #[serde(rename = "createdTime")]
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}
