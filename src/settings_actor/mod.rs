//! Settings store: holds the single public settings record.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
