//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{DashboardSummary, OrdersPerDay, RevenuePerDay, StatusCount};

use crate::core::ServerState;
use crate::services::dashboard::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub days: Option<u32>,
}

impl WindowQuery {
    fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}

/// GET /api/dashboard/summary - today's headline numbers
pub async fn summary(State(state): State<ServerState>) -> Json<DashboardSummary> {
    Json(state.dashboard.summary().await)
}

/// GET /api/dashboard/orders-per-day - rolling per-day order counts
pub async fn orders_per_day(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> Json<Vec<OrdersPerDay>> {
    Json(state.dashboard.orders_per_day(query.days()).await)
}

/// GET /api/dashboard/revenue-per-day - rolling per-day revenue
pub async fn revenue_per_day(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> Json<Vec<RevenuePerDay>> {
    Json(state.dashboard.revenue_per_day(query.days()).await)
}

/// GET /api/dashboard/orders-by-status - status breakdown
pub async fn orders_by_status(State(state): State<ServerState>) -> Json<Vec<StatusCount>> {
    Json(state.dashboard.orders_by_status().await)
}
