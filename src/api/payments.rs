use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use super::{error::ApiError, AppState};

/// Payments are disabled; no provider is ever offered.
#[derive(Debug, Serialize)]
pub struct PaymentProviders {
    pub payments_enabled: bool,
    pub providers: Vec<String>,
}

#[instrument(skip(state))]
pub async fn providers_handler(State(state): State<AppState>) -> Result<Json<PaymentProviders>, ApiError> {
    let payments_enabled = state
        .settings
        .get_settings()
        .await?
        .is_some_and(|s| s.payments_enabled);

    Ok(Json(PaymentProviders {
        payments_enabled,
        providers: Vec::new(),
    }))
}
