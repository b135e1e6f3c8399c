use thiserror::Error;

use crate::customer_actor::CustomerError;
use crate::product_actor::ProductError;

/// Errors that can occur while placing or reading orders.
///
/// The first four variants are domain failures of order placement. The rest
/// come from the stores and pass their message through unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Customer not found!")]
    CustomerNotFound,
    #[error("No products were found with the given IDs!")]
    NoProductsFound,
    #[error("Could not find product with ID {0}!")]
    ProductNotFound(String),
    #[error("The product with ID {0} doesn't have the requested quantity available!")]
    InsufficientStock(String),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Order store returned inconsistent line items: {0}")]
    StoreInconsistency(String),
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Product(#[from] ProductError),
}

impl OrderError {
    /// True for the expected, named failures of order placement.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::CustomerNotFound
                | Self::NoProductsFound
                | Self::ProductNotFound(_)
                | Self::InsufficientStock(_)
        )
    }
}
