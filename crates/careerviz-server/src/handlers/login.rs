//! Credential check handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::schema::login::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let role = state.service.login(req.email(), req.password())?;
    Ok(Json(LoginResponse {
        success: true,
        role,
    }))
}
