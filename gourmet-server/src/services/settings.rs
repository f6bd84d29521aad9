//! Settings service
//!
//! Read/merge-write access to the settings singleton. No history is kept;
//! updates mutate the single global record in place.

use std::sync::Arc;

use shared::AppResult;
use shared::models::{AppSettings, AppSettingsUpdate};

use super::Latency;
use crate::db::MemoryStore;
use crate::db::repository::SettingsRepository;
use crate::utils::validation::validate_non_negative;

pub struct SettingsService {
    settings: SettingsRepository,
    latency: Latency,
}

impl SettingsService {
    pub fn new(store: Arc<MemoryStore>, latency: Latency) -> Self {
        Self {
            settings: SettingsRepository::new(store),
            latency,
        }
    }

    pub async fn fetch_settings(&self) -> AppSettings {
        self.latency.simulate().await;
        self.settings.get()
    }

    pub async fn update_settings(&self, update: AppSettingsUpdate) -> AppResult<AppSettings> {
        self.latency.simulate().await;

        if let Some(fee) = update.delivery_fee_fixed {
            validate_non_negative(fee, "delivery fee")?;
        }

        let settings = self.settings.merge(update);
        tracing::info!(
            delivery_fee = %settings.delivery_fee_fixed,
            open_manual = settings.is_store_open_manual,
            "Settings updated"
        );
        Ok(settings)
    }
}
