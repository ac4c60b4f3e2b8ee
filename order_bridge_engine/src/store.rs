use airtable_tools::{AirtableApi, AirtableApiError};
use serde_json::{Map, Value};

use crate::traits::{RecordStore, StoredRecord};

impl RecordStore for AirtableApi {
    type Error = AirtableApiError;

    async fn create_record(&self, table: &str, fields: Map<String, Value>) -> Result<StoredRecord, Self::Error> {
        let record = AirtableApi::create_record(self, table, &fields).await?;
        Ok(StoredRecord { id: record.id })
    }
}
