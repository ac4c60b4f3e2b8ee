//! Test fakes for the engine and its consumers.

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::traits::{RecordStore, StoredRecord};

#[derive(Debug, Clone, Error)]
#[error("The store rejected the write: {0}")]
pub struct MemoryStoreError(pub String);

/// An in-memory [`RecordStore`] that remembers every write, in order.
///
/// [`MemoryStore::failing_after`] builds a store whose first `n` writes succeed and whose next
/// write fails, for exercising the fail-fast path without a network.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<(String, Map<String, Value>)>,
    fail_after: Option<usize>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(successful_writes: usize) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().fail_after = Some(successful_writes);
        store
    }

    /// Every `(table, fields)` pair written so far, in write order.
    pub fn records(&self) -> Vec<(String, Map<String, Value>)> {
        self.inner.lock().unwrap().records.clone()
    }
}

impl RecordStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn create_record(&self, table: &str, fields: Map<String, Value>) -> Result<StoredRecord, Self::Error> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(allowed) = inner.fail_after {
            if inner.records.len() >= allowed {
                return Err(MemoryStoreError(format!("synthetic failure on write #{}", inner.records.len() + 1)));
            }
        }
        inner.next_id += 1;
        let id = format!("rec{:014}", inner.next_id);
        inner.records.push((table.to_string(), fields));
        Ok(StoredRecord { id })
    }
}
