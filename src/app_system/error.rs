use thiserror::Error;

use crate::customer_actor::CustomerError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Application-level error. Every variant renders a human-readable message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
