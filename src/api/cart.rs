use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use super::{error::ApiError, AppState};
use crate::domain::CouponValidation;

#[derive(Debug, Deserialize)]
pub struct CouponCheckRequest {
    pub code: String,
    pub subtotal: Decimal,
}

#[instrument(skip(state, payload))]
pub async fn validate_coupon_handler(
    State(state): State<AppState>,
    payload: Result<Json<CouponCheckRequest>, JsonRejection>,
) -> Result<Json<CouponValidation>, ApiError> {
    let Json(payload) = payload?;
    let validation = state.coupons.validate_coupon(&payload.code, payload.subtotal).await?;
    Ok(Json(validation))
}
