use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CouponError {
    #[error("Invalid coupon code: {0}")]
    NotFound(String),
    #[error("{0}")]
    Ineligible(String),
    #[error("Coupon code already exists: {0}")]
    AlreadyExists(String),
    #[error("Coupon validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CouponError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(code) => CouponError::NotFound(code),
            FrameworkError::AlreadyExists(code) => CouponError::AlreadyExists(code),
            FrameworkError::Rejected(reason) => CouponError::ValidationError(reason),
            other => CouponError::ActorCommunicationError(other.to_string()),
        }
    }
}
