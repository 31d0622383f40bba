use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `amount` is a percentage of the subtotal.
    Percent,
    /// `amount` is taken off the subtotal as-is.
    Fixed,
}

/// A named discount rule applied against an order subtotal.
///
/// Coupons are stored under their normalized code, see [`normalize_code`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub coupon_id: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub amount: Decimal,
    #[serde(default)]
    pub min_order_value: Decimal,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    /// Carried for reporting; redemptions are not counted.
    #[serde(default)]
    pub usage_limit: Option<u32>,
}

/// Payload for creating a coupon.
#[derive(Debug, Clone)]
pub struct CouponCreate {
    pub code: String,
    pub discount_type: DiscountType,
    pub amount: Decimal,
    pub min_order_value: Decimal,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub usage_limit: Option<u32>,
}

impl CouponCreate {
    pub fn new(code: impl Into<String>, discount_type: DiscountType, amount: Decimal, min_order_value: Decimal) -> Self {
        Self {
            code: code.into(),
            discount_type,
            amount,
            min_order_value,
            valid_from: None,
            valid_until: None,
            usage_limit: None,
        }
    }
}

/// Result of a successful coupon check against a subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponValidation {
    pub coupon_id: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub amount: Decimal,
    pub discount_amount: Decimal,
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
