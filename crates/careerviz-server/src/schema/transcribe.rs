//! Schema types for `/transcribe`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscribeRequest {
    /// `data:audio/webm;...;base64,<payload>` straight from `FileReader`.
    #[serde(default, rename = "audioData")]
    pub audio_data: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    /// Empty when nothing was recognized.
    pub transcript: String,
}
