//! Settings Repository

use std::sync::Arc;

use shared::models::{AppSettings, AppSettingsUpdate};

use crate::db::MemoryStore;

#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<MemoryStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> AppSettings {
        self.store.settings.read().clone()
    }

    /// Merge the partial update onto the singleton record
    pub fn merge(&self, update: AppSettingsUpdate) -> AppSettings {
        let mut settings = self.store.settings.write();
        if let Some(opening_time) = update.opening_time {
            settings.opening_time = opening_time;
        }
        if let Some(closing_time) = update.closing_time {
            settings.closing_time = closing_time;
        }
        if let Some(is_store_open_manual) = update.is_store_open_manual {
            settings.is_store_open_manual = is_store_open_manual;
        }
        if let Some(delivery_fee_fixed) = update.delivery_fee_fixed {
            settings.delivery_fee_fixed = delivery_fee_fixed;
        }
        settings.clone()
    }
}
