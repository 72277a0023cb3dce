use crate::accumulators::ExponentialMovingAverage;
use crate::currency::currency_symbol;
use crate::rounding::{DEFAULT_SIGNIFICANT_DIGITS, SmartRounding};
use anyhow::{Result, anyhow};
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsConfig {
    #[serde(default = "default_account_currency")]
    pub account_currency: String,
    #[serde(default = "default_rolling_window")]
    pub rolling_window: usize,
    #[serde(default = "default_significant_digits")]
    pub significant_digits: u32,
    #[serde(default = "default_integer_rounding_threshold")]
    pub integer_rounding_threshold: Decimal,
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_path: Option<String>,
}

fn default_account_currency() -> String {
    "USD".to_string()
}

fn default_rolling_window() -> usize {
    ExponentialMovingAverage::DEFAULT_WINDOW // ~last 100 analyzed alphas
}

fn default_significant_digits() -> u32 {
    DEFAULT_SIGNIFICANT_DIGITS
}

fn default_integer_rounding_threshold() -> Decimal {
    Decimal::ONE_THOUSAND
}

fn default_report_interval_ms() -> u64 {
    1000
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            account_currency: default_account_currency(),
            rolling_window: default_rolling_window(),
            significant_digits: default_significant_digits(),
            integer_rounding_threshold: default_integer_rounding_threshold(),
            report_interval_ms: default_report_interval_ms(),
            events_path: None,
        }
    }
}

impl StatisticsConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_file("config.json")
    }

    /// Missing file falls back to defaults; malformed JSON is an error
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(config_str) => serde_json::from_str::<StatisticsConfig>(&config_str)
                .map_err(|e| anyhow!("Invalid configuration in {}: {}", path, e))?,
            Err(e) => {
                warn!("Could not read {} ({}), using default configuration", path, e);
                Self::default()
            }
        };

        config.validate()?;
        info!(
            "Statistics config: currency={}, rolling_window={}, significant_digits={}",
            config.account_currency, config.rolling_window, config.significant_digits
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rolling_window == 0 {
            return Err(anyhow!("rolling_window must be at least 1"));
        }
        if self.significant_digits == 0 {
            return Err(anyhow!("significant_digits must be at least 1"));
        }
        if self.integer_rounding_threshold < Decimal::ZERO {
            return Err(anyhow!("integer_rounding_threshold must be non-negative"));
        }
        if currency_symbol(&self.account_currency).is_none() {
            return Err(anyhow!(
                "Unknown account currency: {}",
                self.account_currency
            ));
        }
        Ok(())
    }

    /// Resolved symbol for the account currency
    pub fn currency_symbol(&self) -> Result<&'static str> {
        currency_symbol(&self.account_currency)
            .ok_or_else(|| anyhow!("Unknown account currency: {}", self.account_currency))
    }

    pub fn smart_rounding(&self) -> SmartRounding {
        SmartRounding::new(self.significant_digits, self.integer_rounding_threshold)
    }
}
