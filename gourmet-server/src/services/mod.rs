//! Mock backend services
//!
//! Each service wraps the repositories and stands in for a remote API: every
//! operation awaits the configured artificial latency before touching the
//! tables, so callers experience the timing of a network round-trip without
//! one existing.
//!
//! - [`AuthService`] - static-credential sign-in
//! - [`CatalogService`] - categories, dishes, image upload
//! - [`OrderService`] - checkout and status changes
//! - [`SettingsService`] - the settings singleton
//! - [`DashboardService`] - aggregate queries over the order table
//! - [`simulator`] - background random order injection

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod latency;
pub mod orders;
pub mod settings;
pub mod simulator;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use latency::Latency;
pub use orders::OrderService;
pub use settings::SettingsService;
pub use simulator::{OrderFeed, OrderSimulator, RandomOrderFeed};
