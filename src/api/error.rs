use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::coupon_actor::CouponError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::settings_actor::SettingsError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => {
                error!(error = %self, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::ValidationError(_) => ApiError::Validation(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<CouponError> for ApiError {
    fn from(e: CouponError) -> Self {
        match e {
            CouponError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CouponError::Ineligible(_) => ApiError::BadRequest(e.to_string()),
            CouponError::AlreadyExists(_) | CouponError::ValidationError(_) => ApiError::Validation(e.to_string()),
            CouponError::ActorCommunicationError(_) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) | OrderError::ProductNotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::ValidationError(_) => ApiError::Validation(e.to_string()),
            OrderError::InvalidTransition(_) => ApiError::BadRequest(e.to_string()),
            OrderError::ActorCommunicationError(_) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::NotFound(_) => ApiError::NotFound(e.to_string()),
            SettingsError::ValidationError(_) => ApiError::Validation(e.to_string()),
            SettingsError::ActorCommunicationError(_) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
