use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::instrument;

use super::{error::ApiError, AppState};
use crate::domain::{Order, OrderCreateRequest, OrderReceipt};

#[instrument(skip(state, payload))]
pub async fn create_order_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreateRequest>, JsonRejection>,
) -> Result<Json<OrderReceipt>, ApiError> {
    let Json(payload) = payload?;
    Ok(Json(state.orders.create_order(payload).await?))
}

#[instrument(skip(state))]
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get_order(order_id).await?))
}
