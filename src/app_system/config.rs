use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Load the demo menu, coupons and settings into an empty catalog.
    pub seed_demo_data: bool,
    /// Mailbox size of every store actor.
    pub channel_buffer: usize,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load(&lookup, "STOREFRONT_PORT", "8001")?,
            seed_demo_data: try_load(&lookup, "STOREFRONT_SEED_DEMO_DATA", "true")?,
            channel_buffer: try_load(&lookup, "STOREFRONT_CHANNEL_BUFFER", "100")?,
        })
    }
}

fn try_load<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            Config { port: 8001, seed_demo_data: true, channel_buffer: 100 }
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("STOREFRONT_PORT", "9000"),
            ("STOREFRONT_SEED_DEMO_DATA", "false"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let result = Config::from_lookup(lookup(&[("STOREFRONT_PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::Invalid { key, .. }) if key == "STOREFRONT_PORT"));
    }
}
