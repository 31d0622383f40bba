use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Settings not found: {0}")]
    NotFound(String),
    #[error("Settings validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SettingsError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(key) => SettingsError::NotFound(key),
            FrameworkError::Rejected(reason) => SettingsError::ValidationError(reason),
            other => SettingsError::ActorCommunicationError(other.to_string()),
        }
    }
}
