use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{round_money, Coupon, CouponValidation, DiscountType};
use super::CouponError;

impl Coupon {
    /// Checks eligibility against `subtotal` and computes the discount.
    ///
    /// The discount is clamped to the subtotal, so the discounted amount is
    /// never negative.
    ///
    /// # Errors
    /// - [`CouponError::Ineligible`] when the subtotal is below the minimum
    ///   order value or `now` is outside the validity window
    /// - [`CouponError::ValidationError`] when the discount overflows
    pub fn evaluate(&self, subtotal: Decimal, now: DateTime<Utc>) -> Result<CouponValidation, CouponError> {
        if self.valid_from.is_some_and(|from| now < from) {
            return Err(CouponError::Ineligible("Coupon is not active yet".to_string()));
        }
        if self.valid_until.is_some_and(|until| now > until) {
            return Err(CouponError::Ineligible("Coupon has expired".to_string()));
        }
        if subtotal < self.min_order_value {
            return Err(CouponError::Ineligible("Subtotal too low for this coupon".to_string()));
        }

        let discount = match self.discount_type {
            DiscountType::Percent => subtotal
                .checked_mul(self.amount)
                .map(|d| round_money(d / Decimal::ONE_HUNDRED))
                .ok_or_else(|| CouponError::ValidationError(format!("Subtotal out of range: {subtotal}")))?,
            DiscountType::Fixed => round_money(self.amount),
        };

        Ok(CouponValidation {
            coupon_id: self.coupon_id.clone(),
            code: self.code.clone(),
            discount_type: self.discount_type,
            amount: self.amount,
            discount_amount: discount.min(subtotal).max(Decimal::ZERO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn coupon(code: &str, discount_type: DiscountType, amount: Decimal, min_order_value: Decimal) -> Coupon {
        Coupon {
            coupon_id: format!("id-{code}"),
            code: code.to_string(),
            discount_type,
            amount,
            min_order_value,
            valid_from: None,
            valid_until: None,
            usage_limit: None,
        }
    }

    #[test]
    fn test_percent_discount() {
        let urban10 = coupon("URBAN10", DiscountType::Percent, dec!(10), dec!(15));
        let result = urban10.evaluate(dec!(30.0), Utc::now()).unwrap();

        assert_eq!(result.discount_amount, dec!(3.00));
        assert_eq!(result.code, "URBAN10");
        assert_eq!(result.coupon_id, "id-URBAN10");
        assert_eq!(result.discount_type, DiscountType::Percent);
    }

    #[test]
    fn test_percent_discount_rounds_to_cents() {
        let c = coupon("THIRD", DiscountType::Percent, dec!(33), dec!(0));
        let result = c.evaluate(dec!(10.01), Utc::now()).unwrap();
        assert_eq!(result.discount_amount, dec!(3.30));
    }

    #[test]
    fn test_fixed_discount_cannot_exceed_subtotal() {
        let save = coupon("SAVE10", DiscountType::Fixed, dec!(15), dec!(0));
        let result = save.evaluate(dec!(10), Utc::now()).unwrap();
        assert_eq!(result.discount_amount, dec!(10));
    }

    #[test]
    fn test_percent_discount_cannot_exceed_subtotal() {
        let double = coupon("DOUBLE", DiscountType::Percent, dec!(200), dec!(0));
        let result = double.evaluate(dec!(10), Utc::now()).unwrap();
        assert_eq!(result.discount_amount, dec!(10));
    }

    #[test]
    fn test_oversized_subtotal_is_rejected() {
        let urban10 = coupon("URBAN10", DiscountType::Percent, dec!(10), dec!(15));
        assert!(matches!(
            urban10.evaluate(Decimal::MAX, Utc::now()),
            Err(CouponError::ValidationError(_))
        ));

        let save = coupon("SAVE10", DiscountType::Fixed, dec!(10), dec!(0));
        assert_eq!(save.evaluate(Decimal::MAX, Utc::now()).unwrap().discount_amount, dec!(10));
    }

    #[test]
    fn test_below_minimum_is_ineligible() {
        let welcome = coupon("WELCOME5", DiscountType::Fixed, dec!(5), dec!(20));

        let result = welcome.evaluate(dec!(19.99), Utc::now());
        assert_eq!(result, Err(CouponError::Ineligible("Subtotal too low for this coupon".to_string())));

        // the minimum itself qualifies
        assert_eq!(welcome.evaluate(dec!(20), Utc::now()).unwrap().discount_amount, dec!(5));
    }

    #[test]
    fn test_validity_window() {
        let now = Utc::now();
        let mut seasonal = coupon("SPRING", DiscountType::Fixed, dec!(2), dec!(0));

        seasonal.valid_from = Some(now + Duration::days(1));
        assert!(matches!(seasonal.evaluate(dec!(10), now), Err(CouponError::Ineligible(_))));

        seasonal.valid_from = Some(now - Duration::days(7));
        seasonal.valid_until = Some(now - Duration::days(1));
        assert_eq!(
            seasonal.evaluate(dec!(10), now),
            Err(CouponError::Ineligible("Coupon has expired".to_string()))
        );

        seasonal.valid_until = Some(now + Duration::days(1));
        assert!(seasonal.evaluate(dec!(10), now).is_ok());
    }
}
