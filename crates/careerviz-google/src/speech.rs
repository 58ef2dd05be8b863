//! Google Speech-to-Text `speech:recognize` client.
//!
//! The front-end records short spoken answers with `MediaRecorder`, which
//! produces WebM/Opus at 48 kHz mono. The recognition config is fixed to that
//! format and to Indian English with the long-form model.

use std::sync::Arc;

use async_trait::async_trait;
use careerviz_core::AudioPayload;
use serde::{Deserialize, Serialize};

use crate::error::GoogleError;
use crate::traits::{SpeechRecognizer, TokenProvider};

pub const DEFAULT_SPEECH_BASE_URL: &str = "https://speech.googleapis.com";

/// Recognition parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub model: String,
    pub audio_channel_count: u32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        RecognitionConfig {
            encoding: "WEBM_OPUS".to_string(),
            sample_rate_hertz: 48_000,
            language_code: "en-IN".to_string(),
            model: "latest_long".to_string(),
            audio_channel_count: 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecognizeRequest<'a> {
    pub config: &'a RecognitionConfig,
    pub audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
pub struct RecognitionAudio {
    /// Base64 of the raw audio bytes.
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecognizeResponse {
    /// Absent (not empty) when nothing was recognized.
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl RecognizeResponse {
    /// First alternative of the first result. `Ok(None)` when there are no
    /// results at all; a result with no alternatives is malformed.
    pub fn top_transcript(&self) -> Result<Option<String>, GoogleError> {
        let Some(first) = self.results.first() else {
            return Ok(None);
        };
        first
            .alternatives
            .first()
            .map(|alt| Some(alt.transcript.clone()))
            .ok_or_else(|| {
                GoogleError::Decode("recognition result has no alternatives".to_string())
            })
    }
}

pub struct SpeechClient {
    http: reqwest::Client,
    auth: Arc<dyn TokenProvider>,
    base_url: String,
    config: RecognitionConfig,
}

impl SpeechClient {
    pub fn new(http: reqwest::Client, auth: Arc<dyn TokenProvider>) -> Self {
        SpeechClient {
            http,
            auth,
            base_url: DEFAULT_SPEECH_BASE_URL.to_string(),
            config: RecognitionConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn recognize_url(&self) -> String {
        format!("{}/v1/speech:recognize", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechRecognizer for SpeechClient {
    async fn recognize(&self, audio: &AudioPayload) -> Result<Option<String>, GoogleError> {
        let token = self.auth.access_token().await?;
        let request = RecognizeRequest {
            config: &self.config,
            audio: RecognitionAudio {
                content: audio.to_base64(),
            },
        };

        let response = self
            .http
            .post(self.recognize_url())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GoogleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecognizeResponse = serde_json::from_str(&body)
            .map_err(|err| GoogleError::Decode(format!("recognize response: {}", err)))?;
        parsed.top_transcript()
    }
}
