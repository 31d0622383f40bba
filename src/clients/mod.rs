//! Typed handles over the store actors.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and maps framework failures into its own error type. [`OrderClient`] is the
//! root client: it orchestrates the other three to price and persist orders.

#[macro_use]
mod macros;
mod product_client;
mod coupon_client;
mod settings_client;
mod order_client;

pub use product_client::*;
pub use coupon_client::*;
pub use settings_client::*;
pub use order_client::*;
