use rust_decimal::Decimal;
use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Settings, SETTINGS_KEY};
use crate::settings_actor::SettingsError;

/// Client for interacting with the settings store.
#[derive(Clone)]
pub struct SettingsClient {
    inner: ResourceClient<Settings>,
}

impl_client_new!(SettingsClient, Settings);

impl SettingsClient {
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> Result<Option<Settings>, SettingsError> {
        debug!("Sending request");
        Ok(self.inner.get(SETTINGS_KEY.to_string()).await?)
    }

    /// Tax rate for order assembly, zero while no settings are stored.
    #[instrument(skip(self))]
    pub async fn tax_rate(&self) -> Result<Decimal, SettingsError> {
        Ok(self.get_settings().await?.map(|s| s.tax_rate).unwrap_or(Decimal::ZERO))
    }

    /// Replaces the settings record, creating it on first use.
    #[instrument(skip(self, settings))]
    pub async fn put_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        match self.inner.update(SETTINGS_KEY.to_string(), settings.clone()).await {
            Ok(_) => {}
            Err(FrameworkError::NotFound(_)) => {
                self.inner.create(settings).await?;
            }
            Err(e) => return Err(e.into()),
        }
        info!("Settings stored");
        Ok(())
    }
}
