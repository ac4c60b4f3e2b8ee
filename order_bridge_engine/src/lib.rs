//! # Order Bridge Engine
//!
//! The order bridge engine turns one Shopify order-creation payload into records in a tabular
//! store: one order record, then one record per line item, linked back to the order record by the
//! store-assigned identifier. The library is divided into three main sections:
//!
//! 1. The typed inbound payload ([`shopify_order`]). Shopify guarantees almost nothing about which
//!    fields are present, so every field is optional and derivation rules live in the mappers, not
//!    in the types.
//! 2. Pure field mapping ([`mapping`] and [`helpers`]). Total functions from the inbound payload to
//!    the sanitized key-value records the store accepts, or a typed [`MappingError`] when a
//!    required value cannot be derived. No I/O happens here.
//! 3. Orchestration ([`OrderProcessorApi`]). Writes the order record, then each line-item record in
//!    sequence, through any backend implementing the [`RecordStore`] trait. Processing is
//!    fail-fast: the first mapping or store error ends the order, and records that were already
//!    written stay behind. There is no retry and no compensation pass.
//!
//! The production [`RecordStore`] backend is Airtable (see [`AirtableApi`](airtable_tools)); tests
//! substitute the fakes in [`test_utils`].

pub mod helpers;
pub mod mapping;
pub mod shopify_order;

mod processor;
mod store;
mod traits;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use mapping::MappingError;
pub use processor::{OrderProcessorApi, OrderProcessorError, OrderSummary, TableConfig};
pub use shopify_order::{Address, Customer, LineItem, OrderBuilder, ShopifyOrder};
pub use traits::{RecordStore, StoredRecord};
