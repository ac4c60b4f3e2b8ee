use std::fmt::Debug;

use log::*;
use thiserror::Error;

use crate::{
    mapping::{line_item_record, order_id, order_record, MappingError},
    shopify_order::ShopifyOrder,
    traits::RecordStore,
};

/// The two tables the bridge writes into, by name or table id.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub orders: String,
    pub line_items: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { orders: "Orders".to_string(), line_items: "Line Items".to_string() }
    }
}

#[derive(Debug, Error)]
pub enum OrderProcessorError<B: RecordStore> {
    #[error("Could not map the order payload. {0}")]
    MappingError(#[from] MappingError),
    #[error("The record store rejected a write. {0}")]
    StoreError(B::Error),
}

/// Outcome summary of one successfully processed order, for logging at the boundary.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// The derived order identifier (order number, or id as fallback).
    pub order_id: String,
    /// The store-assigned id of the order record.
    pub record_id: String,
    pub line_items_written: usize,
}

pub struct OrderProcessorApi<B> {
    store: B,
    tables: TableConfig,
}

impl<B> Debug for OrderProcessorApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderProcessorApi")
    }
}

impl<B> OrderProcessorApi<B> {
    pub fn new(store: B, tables: TableConfig) -> Self {
        Self { store, tables }
    }
}

impl<B> OrderProcessorApi<B>
where B: RecordStore
{
    /// Persist one incoming order as an order record plus one record per line item.
    ///
    /// The order record is written first; its store-assigned id is what links every line-item
    /// record back to it. Line items are then written one at a time, in payload order. Processing
    /// stops at the first mapping or store failure, and records that were already written stay
    /// behind: there is no compensation pass and no retry. The caller only learns pass/fail for
    /// the order as a whole.
    pub async fn process_order(&self, order: ShopifyOrder) -> Result<OrderSummary, OrderProcessorError<B>> {
        let order_id = order_id(&order)?;
        let fields = order_record(&order)?;
        let parent =
            self.store.create_record(&self.tables.orders, fields).await.map_err(OrderProcessorError::StoreError)?;
        debug!("🛍️ Order {order_id} stored as record {}", parent.id);
        let mut written = 0;
        for (index, item) in order.line_items.iter().enumerate() {
            let position = index + 1;
            let fields = line_item_record(item, &parent.id, &order_id, position)?;
            let record = self
                .store
                .create_record(&self.tables.line_items, fields)
                .await
                .map_err(OrderProcessorError::StoreError)?;
            trace!("🛍️ Line item {order_id}-{position} stored as record {}", record.id);
            written += 1;
        }
        info!("🛍️ Order {order_id} bridged. 1 order record and {written} line item records written.");
        Ok(OrderSummary { order_id, record_id: parent.id, line_items_written: written })
    }
}

#[cfg(test)]
mod test {
    use serde_json::Value;

    use super::*;
    use crate::{
        shopify_order::{LineItem, OrderBuilder},
        test_utils::MemoryStore,
    };

    fn item(name: &str, price: &str, quantity: i64) -> LineItem {
        LineItem {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            quantity: Some(quantity),
            ..LineItem::default()
        }
    }

    fn order_with_items(items: Vec<LineItem>) -> crate::shopify_order::ShopifyOrder {
        let mut builder = OrderBuilder::new();
        builder.order_number(1001).email("bob.norman@mail.example.com".to_string());
        for i in items {
            builder.line_item(i);
        }
        builder.build()
    }

    #[tokio::test]
    async fn writes_the_order_then_each_item_in_sequence() {
        let store = MemoryStore::new();
        let api = OrderProcessorApi::new(store.clone(), TableConfig::default());
        let order = order_with_items(vec![item("Cap", "19.99", 3), item("Mug", "12.50", 1), item("Tee", "25.00", 2)]);
        let summary = api.process_order(order).await.expect("Processing failed");

        assert_eq!(summary.order_id, "1001");
        assert_eq!(summary.line_items_written, 3);
        let records = store.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].0, "Orders");
        assert!(records[1..].iter().all(|(table, _)| table == "Line Items"));
        let ids: Vec<&Value> = records[1..].iter().map(|(_, fields)| &fields["Line Item ID"]).collect();
        assert_eq!(ids, [&Value::from("1001-1"), &Value::from("1001-2"), &Value::from("1001-3")]);
        // Every line item links back to the order record.
        let link = Value::Array(vec![Value::String(summary.record_id.clone())]);
        assert!(records[1..].iter().all(|(_, fields)| fields["Order ID"] == link));
    }

    #[tokio::test]
    async fn unidentifiable_order_never_reaches_the_store() {
        let store = MemoryStore::new();
        let api = OrderProcessorApi::new(store.clone(), TableConfig::default());
        let err = api
            .process_order(crate::shopify_order::ShopifyOrder::default())
            .await
            .expect_err("Expected a mapping failure");
        assert!(matches!(err, OrderProcessorError::MappingError(MappingError::MissingOrderId)));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn failed_order_write_means_no_line_item_writes() {
        let store = MemoryStore::failing_after(0);
        let api = OrderProcessorApi::new(store.clone(), TableConfig::default());
        let order = order_with_items(vec![item("Cap", "19.99", 3)]);
        let err = api.process_order(order).await.expect_err("Expected a store failure");
        assert!(matches!(err, OrderProcessorError::StoreError(_)));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn failed_line_item_write_keeps_prior_records_and_stops() {
        // Order plus two items succeed; the third item write fails; items 4 and 5 are never sent.
        let store = MemoryStore::failing_after(3);
        let api = OrderProcessorApi::new(store.clone(), TableConfig::default());
        let order = order_with_items(vec![
            item("A", "1.00", 1),
            item("B", "2.00", 1),
            item("C", "3.00", 1),
            item("D", "4.00", 1),
            item("E", "5.00", 1),
        ]);
        let err = api.process_order(order).await.expect_err("Expected a store failure");
        assert!(matches!(err, OrderProcessorError::StoreError(_)));
        let records = store.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].1["Line Item ID"], "1001-1");
        assert_eq!(records[2].1["Line Item ID"], "1001-2");
    }

    #[tokio::test]
    async fn bad_line_item_aborts_after_the_order_write() {
        let store = MemoryStore::new();
        let api = OrderProcessorApi::new(store.clone(), TableConfig::default());
        let mut unpriced = item("Cap", "19.99", 3);
        unpriced.price = None;
        let order = order_with_items(vec![item("Mug", "12.50", 1), unpriced, item("Tee", "25.00", 2)]);
        let err = api.process_order(order).await.expect_err("Expected a mapping failure");
        assert!(matches!(
            err,
            OrderProcessorError::MappingError(MappingError::InvalidLineItemPrice { position: 2, .. })
        ));
        // The order record and the first line item were already committed.
        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn custom_table_names_are_respected() {
        let store = MemoryStore::new();
        let tables = TableConfig { orders: "tblORD".to_string(), line_items: "tblITEMS".to_string() };
        let api = OrderProcessorApi::new(store.clone(), tables);
        let order = order_with_items(vec![item("Cap", "19.99", 1)]);
        api.process_order(order).await.expect("Processing failed");
        let records = store.records();
        assert_eq!(records[0].0, "tblORD");
        assert_eq!(records[1].0, "tblITEMS");
    }
}
