//! Upload API Handlers
//!
//! Mock upload: the file body is drained and discarded, and the returned
//! URL is a placeholder derived from the file name and the current time.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/upload - mock image upload
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        // Drain the body; no bytes are kept
        field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;

        let url = state.catalog.upload_image(&file_name).await;
        return Ok(Json(UploadResponse { url }));
    }

    Err(AppError::validation("no file field in upload"))
}
