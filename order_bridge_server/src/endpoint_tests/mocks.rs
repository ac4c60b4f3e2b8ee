use airtable_tools::AirtableApiError;
use mockall::mock;
use order_bridge_engine::{RecordStore, StoredRecord};
use serde_json::{Map, Value};

mock! {
    pub Store {}

    impl Clone for Store {
        fn clone(&self) -> Self;
    }

    impl RecordStore for Store {
        type Error = AirtableApiError;

        async fn create_record(&self, table: &str, fields: Map<String, Value>) -> Result<StoredRecord, AirtableApiError>;
    }
}
