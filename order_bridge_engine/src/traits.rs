use serde_json::{Map, Value};

/// A backend that can persist one record into a named table.
///
/// This is the seam between the transformation pipeline and the tabular store. The production
/// implementation talks to Airtable; tests substitute the fakes in [`crate::test_utils`] or a mock.
#[allow(async_fn_in_trait)]
pub trait RecordStore: Clone {
    type Error: std::error::Error;

    /// Create a single record in `table` and return what the store assigned. Implementations must
    /// not retry; the pipeline's at-most-once write contract depends on it.
    async fn create_record(&self, table: &str, fields: Map<String, Value>) -> Result<StoredRecord, Self::Error>;
}

/// The part of a store's create-response the pipeline needs: the generated record identifier that
/// links dependent records to their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: String,
}
