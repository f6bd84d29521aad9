//! Settings API Handlers

use axum::{Json, extract::State};
use shared::models::{AppSettings, AppSettingsUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/settings - the settings singleton
pub async fn get(State(state): State<ServerState>) -> Json<AppSettings> {
    Json(state.settings.fetch_settings().await)
}

/// PUT /api/settings - merge-write the settings singleton
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<AppSettingsUpdate>,
) -> AppResult<Json<AppSettings>> {
    let settings = state.settings.update_settings(payload).await?;
    Ok(Json(settings))
}
