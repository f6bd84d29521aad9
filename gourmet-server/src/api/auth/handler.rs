//! Auth API Handlers

use axum::{Json, extract::State};
use shared::models::{SignInRequest, User};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/auth/sign-in - resolve static credentials to a user record
///
/// No token is issued; the client persists the returned record itself.
pub async fn sign_in(
    State(state): State<ServerState>,
    Json(payload): Json<SignInRequest>,
) -> AppResult<Json<User>> {
    let user = state.auth.sign_in(&payload.email, &payload.password).await?;
    Ok(Json(user))
}
