use rust_decimal::Decimal;
use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::{normalize_code, Coupon, CouponCreate};

/// Key generator for the coupon store: the normalized code.
pub fn coupon_key(params: &CouponCreate) -> String {
    normalize_code(&params.code)
}

impl Entity for Coupon {
    type Id = String;
    type CreateParams = CouponCreate;
    type UpdateParams = ();
    type Action = ();
    type ActionResult = ();

    /// Creates a new Coupon stored under its normalized code.
    ///
    /// # Errors
    /// Rejects an empty code, a negative amount or an inverted validity window.
    fn from_create_params(code: String, params: CouponCreate) -> Result<Self, String> {
        if code.is_empty() {
            return Err("Coupon code must not be empty".to_string());
        }
        if params.amount < Decimal::ZERO {
            return Err(format!("Negative coupon amount: {}", params.amount));
        }
        if let (Some(from), Some(until)) = (params.valid_from, params.valid_until) {
            if from > until {
                return Err(format!("Coupon {code} expires before it starts"));
            }
        }
        Ok(Self {
            coupon_id: Uuid::new_v4().to_string(),
            code,
            discount_type: params.discount_type,
            amount: params.amount,
            min_order_value: params.min_order_value,
            valid_from: params.valid_from,
            valid_until: params.valid_until,
            usage_limit: params.usage_limit,
        })
    }

    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
