//! Coupon store and discount evaluation.
//!
//! Coupons are keyed by their normalized code, so the store itself enforces
//! code uniqueness.

pub mod entity;
pub mod error;
mod evaluate;

pub use entity::*;
pub use error::*;
