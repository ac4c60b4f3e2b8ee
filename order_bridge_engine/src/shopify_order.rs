use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An order-creation webhook payload, as Shopify delivers it.
///
/// Shopify webhook bodies carry dozens of fields and omit any of them freely, so every field here
/// is optional and unknown fields are ignored. The only hard requirement, enforced by the mappers
/// rather than the type, is that either `order_number` or `id` is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopifyOrder {
    pub id: Option<i64>,
    pub order_number: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
    pub total_price: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub tags: Option<String>,
    pub customer: Option<Customer>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: Option<i64>,
}

/// A postal address as embedded in an order. Billing addresses additionally supply the contact
/// name and phone for the order record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<String>,
    pub sku: Option<String>,
    pub product_id: Option<i64>,
    pub variant_id: Option<i64>,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub requires_shipping: Option<bool>,
    pub taxable: Option<bool>,
    pub gift_card: Option<bool>,
}

/// Assembles [`ShopifyOrder`] values piecemeal. Mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    order: ShopifyOrder,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self, id: i64) -> &mut Self {
        self.order.id = Some(id);
        self
    }

    pub fn order_number(&mut self, order_number: i64) -> &mut Self {
        self.order.order_number = Some(order_number);
        self
    }

    pub fn email(&mut self, email: String) -> &mut Self {
        self.order.email = Some(email);
        self
    }

    pub fn phone(&mut self, phone: String) -> &mut Self {
        self.order.phone = Some(phone);
        self
    }

    pub fn currency(&mut self, currency: String) -> &mut Self {
        self.order.currency = Some(currency);
        self
    }

    pub fn total_price(&mut self, total_price: String) -> &mut Self {
        self.order.total_price = Some(total_price);
        self
    }

    pub fn created_at(&mut self, created_at: DateTime<Utc>) -> &mut Self {
        self.order.created_at = Some(created_at);
        self
    }

    pub fn financial_status(&mut self, financial_status: String) -> &mut Self {
        self.order.financial_status = Some(financial_status);
        self
    }

    pub fn fulfillment_status(&mut self, fulfillment_status: String) -> &mut Self {
        self.order.fulfillment_status = Some(fulfillment_status);
        self
    }

    pub fn tags(&mut self, tags: String) -> &mut Self {
        self.order.tags = Some(tags);
        self
    }

    pub fn customer(&mut self, customer: Customer) -> &mut Self {
        self.order.customer = Some(customer);
        self
    }

    pub fn billing_address(&mut self, address: Address) -> &mut Self {
        self.order.billing_address = Some(address);
        self
    }

    pub fn shipping_address(&mut self, address: Address) -> &mut Self {
        self.order.shipping_address = Some(address);
        self
    }

    pub fn line_item(&mut self, item: LineItem) -> &mut Self {
        self.order.line_items.push(item);
        self
    }

    pub fn build(self) -> ShopifyOrder {
        self.order
    }
}
