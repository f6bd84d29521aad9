//! Shared application state

use std::sync::Arc;

use crate::core::Config;
use crate::db::MemoryStore;
use crate::orders::TransitionPolicy;
use crate::services::{
    AuthService, CatalogService, DashboardService, Latency, OrderService, SettingsService,
};

/// Application state handed to every HTTP handler
///
/// All services share one [`MemoryStore`], so a state value is a complete,
/// isolated instance of the backend. Construct one per process, or one per
/// test for isolation.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<MemoryStore>,
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
    pub settings: Arc<SettingsService>,
    pub dashboard: Arc<DashboardService>,
}

impl ServerState {
    /// Build state over an existing store
    pub fn new(store: Arc<MemoryStore>, latency: Latency, policy: TransitionPolicy) -> Self {
        Self {
            auth: Arc::new(AuthService::new(store.clone(), latency)),
            catalog: Arc::new(CatalogService::new(store.clone(), latency)),
            orders: Arc::new(OrderService::new(store.clone(), latency, policy)),
            settings: Arc::new(SettingsService::new(store.clone(), latency)),
            dashboard: Arc::new(DashboardService::new(store.clone(), latency)),
            store,
        }
    }

    /// Build state from config, seeded with the demo dataset
    pub fn with_config(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::seeded());
        Self::new(
            store,
            Latency::from_millis(config.mock_latency_ms),
            config.transition_policy,
        )
    }
}
