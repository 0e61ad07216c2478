//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LOCAUTO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// ## Fields
/// Defaults target a local development API. Deployments set the
/// `LOCAUTO_*` variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name shown in the window chrome and confirmations.
    pub company_name: String,

    /// Base URL of the rental REST API.
    pub api_base_url: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol for display, appended after the amount.
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    /// XOF has none: amounts are whole francs.
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Company: "LocAuto"
    /// - API: http://localhost:8000/api
    /// - Currency: XOF (FCFA), 0 decimals
    fn default() -> Self {
        ConfigState {
            company_name: "LocAuto".to_string(),
            api_base_url: "http://localhost:8000/api".to_string(),
            currency_code: "XOF".to_string(),
            currency_symbol: "FCFA".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LOCAUTO_API_URL`: API base URL
    /// - `LOCAUTO_COMPANY_NAME`: Override company name
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(url) = std::env::var("LOCAUTO_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(name) = std::env::var("LOCAUTO_COMPANY_NAME") {
            config.company_name = name;
        }

        config
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(75_000), "75000 FCFA");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        if self.currency_decimals == 0 {
            return format!("{} {}", minor, self.currency_symbol);
        }

        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (minor / divisor).abs();
        let frac = (minor % divisor).abs();

        format!(
            "{}{}.{:0width$} {}",
            if minor < 0 { "-" } else { "" },
            whole,
            frac,
            self.currency_symbol,
            width = self.currency_decimals as usize
        )
    }
}
