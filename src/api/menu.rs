use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use super::{error::ApiError, AppState};
use crate::domain::{Category, Product, ProductFilter};

#[instrument(skip(state))]
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.products.list_categories().await?))
}

#[instrument(skip(state))]
pub async fn products_handler(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list_products(filter).await?))
}
