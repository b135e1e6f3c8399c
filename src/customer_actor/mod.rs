//! Customer entity wiring for the resource actor.

pub mod entity;
pub mod error;

pub use error::*;
