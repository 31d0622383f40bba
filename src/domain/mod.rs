pub mod money;
pub mod product;
pub mod coupon;
pub mod settings;
pub mod order;

pub use money::*;
pub use product::*;
pub use coupon::*;
pub use settings::*;
pub use order::*;
