//! Actor-backed order placement.
//!
//! Three [`actor_framework::ResourceActor`]s own the customer, product and
//! order collections. Typed clients wrap their channels and implement the
//! [`ports`] traits, and [`services::CreateOrderService`] places orders on
//! top of those traits. [`app_system::OrderSystem`] wires everything up.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod customer_actor;
pub mod domain;
pub mod order_actor;
pub mod ports;
pub mod product_actor;
pub mod services;

#[cfg(test)]
mod mock_framework;
