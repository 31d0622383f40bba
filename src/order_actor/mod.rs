//! Order store: priced order snapshots keyed by a random id.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;
