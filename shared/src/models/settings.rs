//! App Settings Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Global store configuration (singleton)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Opening time of day (HH:MM, e.g. "09:00")
    pub opening_time: String,
    /// Closing time of day (HH:MM, e.g. "23:00")
    pub closing_time: String,
    /// Manual override for the open/closed status
    pub is_store_open_manual: bool,
    /// Flat delivery fee added to every order total (non-negative)
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee_fixed: Decimal,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            opening_time: "09:00".to_string(),
            closing_time: "23:00".to_string(),
            is_store_open_manual: true,
            delivery_fee_fixed: Decimal::new(500, 2),
        }
    }
}

/// Update settings payload (merge-write)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettingsUpdate {
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub is_store_open_manual: Option<bool>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub delivery_fee_fixed: Option<Decimal>,
}
