use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use super::{error::ApiError, AppState};
use crate::domain::{Brand, Image};

const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1482049016688-2d3e1b311543?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2Mzl8MHwxfHNlYXJjaHwxfHxmb29kfGVufDB8fHx8MTc1NDY3MTUwNHww&ixlib=rb-4.1.0&q=85";

#[derive(Debug, Serialize)]
pub struct PublicConfig {
    pub brand: Brand,
    pub currency: String,
    pub tax_rate: Decimal,
    pub payments_enabled: bool,
    pub hero_image: Image,
}

#[instrument(skip(state))]
pub async fn public_config_handler(State(state): State<AppState>) -> Result<Json<PublicConfig>, ApiError> {
    let settings = state.settings.get_settings().await?.unwrap_or_default();

    Ok(Json(PublicConfig {
        brand: settings.brand,
        currency: settings.currency,
        tax_rate: settings.tax_rate,
        payments_enabled: settings.payments_enabled,
        hero_image: Image::new(HERO_IMAGE_URL, "Urban Bites hero"),
    }))
}
