//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - sign-in against the static staff table
//! - [`categories`] - category listing
//! - [`dishes`] - menu management
//! - [`upload`] - mock image upload
//! - [`orders`] - checkout and order management
//! - [`settings`] - the settings singleton
//! - [`dashboard`] - aggregate queries

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod dishes;
pub mod health;
pub mod orders;
pub mod settings;
pub mod upload;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(categories::router())
        .merge(dishes::router())
        .merge(upload::router())
        .merge(orders::router())
        .merge(settings::router())
        .merge(dashboard::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
