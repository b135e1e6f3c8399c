use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::Customer;

/// One requested product/quantity pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Caller-supplied command for placing an order.
///
/// `products` is taken as given: duplicate product ids are neither merged
/// nor rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreationRequest {
    pub customer_id: String,
    pub products: Vec<OrderLineRequest>,
}

impl OrderLineRequest {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl OrderCreationRequest {
    pub fn new(customer_id: impl Into<String>, products: Vec<OrderLineRequest>) -> Self {
        Self {
            customer_id: customer_id.into(),
            products,
        }
    }
}

/// A line item as handed to the order store, priced at the product's
/// stored price when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A stored line item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug)]
pub struct OrderCreate {
    pub customer: Customer,
    pub line_items: Vec<NewLineItem>,
}

impl Order {
    /// Sum of `price * quantity` over every line item.
    pub fn total(&self) -> Decimal {
        self.line_items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}
