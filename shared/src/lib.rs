//! Shared types for the GourmetGo workspace
//!
//! Domain models, the unified error system and small utilities used by
//! both the server and the client crates.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResponse, AppResult};
pub use serde::{Deserialize, Serialize};
