//! Pure field mappers from the inbound payload to store-ready records.
//!
//! A record is a `serde_json::Map` holding exactly the keys the target schema defines. The
//! sanitation invariant: a key is only ever inserted with a usable value, so no record carries an
//! empty string or a null. Meaningful falsy values (`false`, `0`) are always written.

use log::trace;
use ob_common::parse_money;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    helpers::format_address,
    shopify_order::{LineItem, ShopifyOrder},
};

#[derive(Debug, Clone, Error)]
pub enum MappingError {
    #[error("The order has neither an order number nor an id, so no order id can be derived.")]
    MissingOrderId,
    #[error("Line item #{position} does not have a parsable price ({price:?}).")]
    InvalidLineItemPrice { position: usize, price: Option<String> },
    #[error("Line item #{position} does not have a usable quantity.")]
    InvalidLineItemQuantity { position: usize },
}

/// The stable identifier for an order: the order number, falling back to the numeric id.
/// An order with neither cannot be bridged at all.
pub fn order_id(order: &ShopifyOrder) -> Result<String, MappingError> {
    order.order_number.or(order.id).map(|n| n.to_string()).ok_or(MappingError::MissingOrderId)
}

/// Map one order payload to its order record.
///
/// Derivations: Billing Name is the trimmed concatenation of the billing address name parts; Phone
/// prefers the billing address phone over the order-level one; Total Price coerces to 0 when the
/// payload value is absent or unparsable; Currency and Fulfillment Status carry defaults. Fields
/// with nothing usable behind them are omitted outright.
pub fn order_record(order: &ShopifyOrder) -> Result<Map<String, Value>, MappingError> {
    let mut fields = Map::new();
    fields.insert("Order ID".to_string(), Value::String(order_id(order)?));
    put_text(&mut fields, "Billing Name", billing_name(order));
    put_text(&mut fields, "Phone", phone(order));
    put_text(&mut fields, "Email", order.email.clone());
    let total = order.total_price.as_deref().and_then(parse_money).unwrap_or(0.0);
    fields.insert("Total Price".to_string(), Value::from(total));
    let currency = order.currency.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "USD".to_string());
    fields.insert("Currency".to_string(), Value::String(currency));
    put_text(&mut fields, "Order Date", order.created_at.map(|ts| ts.to_rfc3339()));
    put_text(&mut fields, "Financial Status", order.financial_status.clone());
    let fulfillment =
        order.fulfillment_status.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "unfulfilled".to_string());
    fields.insert("Fulfillment Status".to_string(), Value::String(fulfillment));
    put_text(&mut fields, "Tags", order.tags.clone());
    if let Some(id) = order.customer.as_ref().and_then(|c| c.id) {
        fields.insert("Customer ID".to_string(), Value::from(id));
    }
    put_text(&mut fields, "Shipping Address", order.shipping_address.as_ref().map(format_address));
    put_text(&mut fields, "Billing Address", order.billing_address.as_ref().map(format_address));
    trace!("Mapped order to {} fields", fields.len());
    Ok(fields)
}

/// Map one line item to its record.
///
/// `parent_record_id` is the store-assigned id of the already-created order record; `order_id` is
/// the derived order identifier; `position` is 1-based within the order's line-item sequence.
///
/// Unlike the order total, a missing or unparsable price (or a missing quantity) is an error here:
/// silently writing a zero-priced line item would corrupt any financial reporting built on the
/// table.
pub fn line_item_record(
    item: &LineItem,
    parent_record_id: &str,
    order_id: &str,
    position: usize,
) -> Result<Map<String, Value>, MappingError> {
    let price = item
        .price
        .as_deref()
        .and_then(parse_money)
        .ok_or_else(|| MappingError::InvalidLineItemPrice { position, price: item.price.clone() })?;
    let quantity = item.quantity.ok_or(MappingError::InvalidLineItemQuantity { position })?;
    let mut fields = Map::new();
    fields.insert("Line Item ID".to_string(), Value::String(format!("{order_id}-{position}")));
    // A link field is a list of record ids, even when it links a single record.
    fields.insert("Order ID".to_string(), Value::Array(vec![Value::String(parent_record_id.to_string())]));
    put_text(&mut fields, "Item Name", item.name.clone());
    fields.insert("Line Item Quantity".to_string(), Value::from(quantity));
    fields.insert("Line Item Price".to_string(), Value::from(price));
    fields.insert("Total Line Price".to_string(), Value::from(price * quantity as f64));
    put_text(&mut fields, "SKU", item.sku.clone());
    if let Some(id) = item.product_id {
        fields.insert("Product ID".to_string(), Value::from(id));
    }
    if let Some(id) = item.variant_id {
        fields.insert("Variant ID".to_string(), Value::from(id));
    }
    put_text(&mut fields, "Vendor", item.vendor.clone());
    put_text(&mut fields, "Product Type", item.product_type.clone());
    fields.insert("Requires Shipping".to_string(), Value::Bool(item.requires_shipping.unwrap_or(false)));
    fields.insert("Taxable".to_string(), Value::Bool(item.taxable.unwrap_or(false)));
    fields.insert("Gift Card".to_string(), Value::Bool(item.gift_card.unwrap_or(false)));
    Ok(fields)
}

fn billing_name(order: &ShopifyOrder) -> Option<String> {
    order.billing_address.as_ref().map(|addr| {
        let first = addr.first_name.as_deref().unwrap_or_default();
        let last = addr.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    })
}

fn phone(order: &ShopifyOrder) -> Option<String> {
    order
        .billing_address
        .as_ref()
        .and_then(|addr| addr.phone.clone())
        .filter(|p| !p.is_empty())
        .or_else(|| order.phone.clone())
}

fn put_text(fields: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(text) = value {
        if !text.is_empty() {
            fields.insert(key.to_string(), Value::String(text));
        }
    }
}
