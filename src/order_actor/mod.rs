//! Order entity wiring and the errors raised while placing orders.

pub mod entity;
pub mod error;

pub use error::*;
