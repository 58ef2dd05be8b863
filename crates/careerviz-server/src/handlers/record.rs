//! Survey record handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::schema::record::{RecordRequest, RecordResponse};
use crate::state::AppState;

/// Appends the student's answer to the results sheet.
///
/// `POST /record`
pub async fn record(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    state
        .service
        .record(req.name.as_deref(), req.career.as_deref())
        .await?;
    Ok(Json(RecordResponse {
        success: true,
        message: "Record saved".to_string(),
    }))
}
