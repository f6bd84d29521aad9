//! GourmetGo Server - food ordering backend with an in-memory mock data service
//!
//! # Architecture
//!
//! The server holds the authoritative in-memory state for categories, dishes,
//! orders, settings and users, and exposes it through a RESTful API. Every
//! service operation resolves after a configurable artificial latency to
//! behave like a remote backend; a background simulator injects occasional
//! walk-in orders so polling consumers see organic arrivals.
//!
//! # Module structure
//!
//! ```text
//! gourmet-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # In-memory store, seed data, repositories
//! ├── orders/        # Status lifecycle and transition policy
//! ├── services/      # Mock backend services and the order simulator
//! └── utils/         # Logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use db::MemoryStore;
pub use orders::TransitionPolicy;
pub use services::{
    AuthService, CatalogService, DashboardService, Latency, OrderFeed, OrderService,
    OrderSimulator, RandomOrderFeed, SettingsService,
};
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
