//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Transaction validation settings.
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Transaction validation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    /// Largest amount considered plausible, in whole currency units.
    #[serde(default = "default_max_amount")]
    pub max_amount: u64,
    /// Days before a candidate's date scanned for duplicates.
    #[serde(default = "default_lookback_days")]
    pub duplicate_lookback_days: i64,
    /// Days after a candidate's date scanned for duplicates.
    #[serde(default = "default_lookahead_days")]
    pub duplicate_lookahead_days: i64,
}

fn default_max_amount() -> u64 {
    1_000_000
}

fn default_lookback_days() -> i64 {
    7
}

fn default_lookahead_days() -> i64 {
    1
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_amount: default_max_amount(),
            duplicate_lookback_days: default_lookback_days(),
            duplicate_lookahead_days: default_lookahead_days(),
        }
    }
}

impl ValidationSettings {
    /// Returns the plausibility ceiling as a decimal amount.
    #[must_use]
    pub fn ceiling(&self) -> Decimal {
        Decimal::from(self.max_amount)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CENTIME").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_defaults() {
        let settings = ValidationSettings::default();
        assert_eq!(settings.max_amount, 1_000_000);
        assert_eq!(settings.duplicate_lookback_days, 7);
        assert_eq!(settings.duplicate_lookahead_days, 1);
        assert_eq!(settings.ceiling(), dec!(1000000));
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load().expect("config should load");
        assert_eq!(config.validation.max_amount, 1_000_000);
        assert_eq!(config.validation.duplicate_lookahead_days, 1);
    }
}
