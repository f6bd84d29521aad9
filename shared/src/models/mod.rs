//! Data models
//!
//! Shared between gourmet-server and gourmet-client (via API).
//! Money fields are `rust_decimal::Decimal` serialized as JSON numbers.
//! All IDs are prefixed strings (see `util::prefixed_id`).

pub mod cart;
pub mod category;
pub mod dashboard;
pub mod dish;
pub mod order;
pub mod settings;
pub mod user;

// Re-exports
pub use cart::*;
pub use category::*;
pub use dashboard::*;
pub use dish::*;
pub use order::*;
pub use settings::*;
pub use user::*;
