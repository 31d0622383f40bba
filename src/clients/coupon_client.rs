use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::coupon_actor::CouponError;
use crate::domain::{normalize_code, Coupon, CouponCreate, CouponValidation};

/// Client for interacting with the coupon store.
#[derive(Clone)]
pub struct CouponClient {
    inner: ResourceClient<Coupon>,
}

impl_basic_client!(CouponClient, Coupon, CouponError, coupon);

impl CouponClient {
    #[instrument(skip(self, coupon), fields(code = %coupon.code))]
    pub async fn create_coupon(&self, coupon: CouponCreate) -> Result<String, CouponError> {
        debug!("Sending request");
        Ok(self.inner.create(coupon).await?)
    }

    /// Looks up `code` (trimmed, case-insensitive) and prices it against `subtotal`.
    ///
    /// # Errors
    /// - [`CouponError::NotFound`] for an unknown code
    /// - [`CouponError::Ineligible`] when the coupon does not apply to this subtotal
    #[instrument(skip(self))]
    pub async fn validate_coupon(&self, code: &str, subtotal: Decimal) -> Result<CouponValidation, CouponError> {
        let key = normalize_code(code);
        let coupon = self
            .get_coupon(key.clone())
            .await?
            .ok_or(CouponError::NotFound(key))?;

        let validation = coupon.evaluate(subtotal, Utc::now())?;
        info!(discount = %validation.discount_amount, "Coupon accepted");
        Ok(validation)
    }

    /// Best-effort variant of [`validate_coupon`](Self::validate_coupon) used at checkout.
    ///
    /// An unknown or ineligible coupon yields `None`; only store failures are errors.
    #[instrument(skip(self))]
    pub async fn try_apply_coupon(&self, code: &str, subtotal: Decimal) -> Result<Option<CouponValidation>, CouponError> {
        match self.validate_coupon(code, subtotal).await {
            Ok(validation) => Ok(Some(validation)),
            Err(e @ (CouponError::NotFound(_) | CouponError::Ineligible(_))) => {
                warn!(reason = %e, "Coupon not applied");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
