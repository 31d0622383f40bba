//! Catalog store: products keyed by a random id.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
