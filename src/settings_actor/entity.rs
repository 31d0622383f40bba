use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Settings, SETTINGS_KEY};

/// Every settings record lands on the same key.
pub fn settings_key(_params: &Settings) -> String {
    SETTINGS_KEY.to_string()
}

fn check_tax_rate(settings: &Settings) -> Result<(), String> {
    if settings.tax_rate < Decimal::ZERO || settings.tax_rate > Decimal::ONE {
        return Err(format!("Tax rate must be a fraction between 0 and 1, got {}", settings.tax_rate));
    }
    Ok(())
}

impl Entity for Settings {
    type Id = String;
    type CreateParams = Settings;
    type UpdateParams = Settings; // Full replacement
    type Action = ();
    type ActionResult = ();

    fn from_create_params(_id: String, params: Settings) -> Result<Self, String> {
        check_tax_rate(&params)?;
        Ok(params)
    }

    fn on_update(&mut self, update: Settings) -> Result<(), String> {
        check_tax_rate(&update)?;
        *self = update;
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn with_tax(tax_rate: Decimal) -> Settings {
        Settings { tax_rate, ..Settings::default() }
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(Settings::from_create_params(SETTINGS_KEY.into(), with_tax(dec!(0))).is_ok());
        assert!(Settings::from_create_params(SETTINGS_KEY.into(), with_tax(dec!(1))).is_ok());
        assert!(Settings::from_create_params(SETTINGS_KEY.into(), with_tax(dec!(1.01))).is_err());
        assert!(Settings::from_create_params(SETTINGS_KEY.into(), with_tax(dec!(-0.01))).is_err());
    }

    #[test]
    fn test_rejected_update_keeps_record() {
        let mut settings = with_tax(dec!(0.08));

        assert!(settings.on_update(with_tax(dec!(2))).is_err());
        assert_eq!(settings.tax_rate, dec!(0.08));

        settings.on_update(with_tax(dec!(0.1))).unwrap();
        assert_eq!(settings.tax_rate, dec!(0.1));
    }
}
