//! Application use cases built on top of the store clients.

pub mod create_order;

pub use create_order::CreateOrderService;
