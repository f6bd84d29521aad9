//! Dashboard API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/summary", get(handler::summary))
        .route("/orders-per-day", get(handler::orders_per_day))
        .route("/revenue-per-day", get(handler::revenue_per_day))
        .route("/orders-by-status", get(handler::orders_by_status))
}
