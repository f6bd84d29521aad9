//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{Order, OrderCreate, OrderFilters, OrderStatusUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/orders - list orders newest-first with optional filters
pub async fn list(
    State(state): State<ServerState>,
    Query(filters): Query<OrderFilters>,
) -> Json<Vec<Order>> {
    Json(state.orders.fetch_orders(&filters).await)
}

/// GET /api/orders/{id} - fetch a single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .fetch_order(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(order))
}

/// POST /api/orders - submit a checkout
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.create_order(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status - overwrite an order's status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update_order_status(&id, payload.status).await?;
    Ok(Json(order))
}
