//! In-memory data store
//!
//! The authoritative state of the mock backend: one table per entity plus
//! the settings singleton. A store is constructed explicitly (per process,
//! or per test for isolation) and shared behind an `Arc`, never held as a
//! module-level global.
//!
//! Tables are guarded by `parking_lot::RwLock`; mutations are short and
//! synchronous, and the artificial latency of the service layer happens
//! outside any lock.

pub mod repository;
pub mod seed;

use parking_lot::RwLock;
use shared::models::{AppSettings, Category, Dish, Order, User};

/// In-memory tables for the mock backend
pub struct MemoryStore {
    pub(crate) categories: RwLock<Vec<Category>>,
    pub(crate) dishes: RwLock<Vec<Dish>>,
    pub(crate) orders: RwLock<Vec<Order>>,
    pub(crate) settings: RwLock<AppSettings>,
    pub(crate) users: RwLock<Vec<User>>,
}

impl MemoryStore {
    /// Empty store with default settings (tests)
    pub fn empty() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
            dishes: RwLock::new(Vec::new()),
            orders: RwLock::new(Vec::new()),
            settings: RwLock::new(AppSettings::default()),
            users: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with the demo dataset
    pub fn seeded() -> Self {
        seed::seeded_store()
    }
}
