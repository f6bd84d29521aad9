//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{Dish, DishCreate, DishUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct DishQuery {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    #[serde(rename = "searchTerm")]
    pub search: Option<String>,
}

/// GET /api/dishes - list dishes, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DishQuery>,
) -> Json<Vec<Dish>> {
    let dishes = state
        .catalog
        .fetch_dishes(query.category_id.as_deref(), query.search.as_deref())
        .await;
    Json(dishes)
}

/// GET /api/dishes/{id} - fetch a single dish
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    let dish = state
        .catalog
        .fetch_dish(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Dish {}", id)))?;
    Ok(Json(dish))
}

/// POST /api/dishes - create a dish
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DishCreate>,
) -> AppResult<Json<Dish>> {
    let dish = state.catalog.add_dish(payload).await?;
    Ok(Json(dish))
}

/// PUT /api/dishes/{id} - merge partial fields onto a dish
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DishUpdate>,
) -> AppResult<Json<Dish>> {
    let dish = state.catalog.update_dish(&id, payload).await?;
    Ok(Json(dish))
}

/// DELETE /api/dishes/{id} - remove a dish (no error when absent)
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> StatusCode {
    state.catalog.delete_dish(&id).await;
    StatusCode::NO_CONTENT
}
