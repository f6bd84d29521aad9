//! Core server modules
//!
//! - [`config`] - environment-driven configuration
//! - [`state`] - shared application state
//! - [`server`] - HTTP server startup and shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
