//! GourmetGo Client - client-side state for the food ordering app
//!
//! Cart and session state persisted through a pluggable key-value storage
//! port (the browser local-storage analog), the role-based route guard, and
//! request fencing for overlapping fetches.

pub mod cart;
pub mod fetch;
pub mod routes;
pub mod session;
pub mod storage;

pub use cart::CartStore;
pub use fetch::FetchSequencer;
pub use routes::{Access, RouteGuard};
pub use session::{AuthGate, Authenticator};
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage, StorageError};

// Re-export shared types for convenience
pub use shared::models::{CartItem, Dish, Role, User};
