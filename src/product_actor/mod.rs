//! Product entity wiring, including stock overwrites.

pub mod entity;
pub mod error;

pub use error::*;
