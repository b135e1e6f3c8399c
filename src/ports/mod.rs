//! Collaborator contracts used by order placement.
//!
//! The actor-backed clients implement these; tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::customer_actor::CustomerError;
use crate::domain::{Customer, NewLineItem, Order, Product, StockUpdate};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Customer lookup.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns `None` when no customer has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError>;
}

/// Product lookup and stock writes.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the products whose ids are in `ids`. Unknown ids are dropped
    /// without error.
    async fn find_all_by_ids(&self, ids: &[String]) -> Result<Vec<Product>, ProductError>;

    /// Overwrites the stock level of each product with the given value.
    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order and returns it with its generated line items.
    async fn create(&self, customer: Customer, line_items: Vec<NewLineItem>) -> Result<Order, OrderError>;
}
