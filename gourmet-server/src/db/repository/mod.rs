//! Repositories over the in-memory tables
//!
//! Synchronous, lock-scoped access to [`MemoryStore`](super::MemoryStore).
//! The artificial latency of the mock API lives in the service layer, never
//! here, so repositories stay directly usable from tests and background
//! workers.
//!
//! Lock order where two tables are touched: categories before dishes.

pub mod category;
pub mod dish;
pub mod order;
pub mod settings;
pub mod user;

pub use category::CategoryRepository;
pub use dish::DishRepository;
pub use order::OrderRepository;
pub use settings::SettingsRepository;
pub use user::UserRepository;
