use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key of the single settings record.
pub const SETTINGS_KEY: &str = "public";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub theme: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Urban Bites".to_string(),
            theme: "dark".to_string(),
        }
    }
}

/// Store-wide configuration read while assembling orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub brand: Brand,
    /// Fraction of the taxable amount, e.g. `0.08`.
    #[serde(default)]
    pub tax_rate: Decimal,
    pub currency: String,
    #[serde(default)]
    pub payments_enabled: bool,
    #[serde(default)]
    pub restaurant_hours: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            tax_rate: Decimal::ZERO,
            currency: "USD".to_string(),
            payments_enabled: false,
            restaurant_hours: BTreeMap::new(),
        }
    }
}
