//! Speech transcription handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::schema::transcribe::{TranscribeRequest, TranscribeResponse};
use crate::state::AppState;

/// Silence is a successful, empty transcript rather than an error.
///
/// `POST /transcribe`
pub async fn transcribe(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TranscribeRequest>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let transcript = state.service.transcribe(req.audio_data.as_deref()).await?;
    Ok(Json(TranscribeResponse {
        success: true,
        transcript,
    }))
}
