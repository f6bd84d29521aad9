//! Category API Handlers

use axum::{Json, extract::State};
use shared::models::Category;

use crate::core::ServerState;

/// GET /api/categories - full category list in stable order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.catalog.fetch_categories().await)
}
