//! Typed handles over the resource actors.

mod macros;
pub mod customer_client;
pub mod product_client;
pub mod order_client;

pub use customer_client::CustomerClient;
pub use product_client::ProductClient;
pub use order_client::OrderClient;
