//! Request logic behind the three routes.
//!
//! [`RelayService`] owns the credential table, the two collaborators and the
//! clock. Each method validates presence of its inputs, makes at most one
//! collaborator call, and maps the outcome to a value or an [`ApiError`].
//! Nothing is retried and nothing is kept between calls.

use std::sync::Arc;

use careerviz_core::{AudioPayload, Clock, CredentialTable, Role, SurveyRecord};
use careerviz_google::{SheetAppender, SpeechRecognizer};

use crate::error::ApiError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MISSING_RECORD_FIELDS: &str = "Missing name or career";
pub const RECORD_FAILED: &str = "Failed to save record";
pub const NO_AUDIO_DATA: &str = "No audio data";
pub const TRANSCRIBE_FAILED: &str = "Failed to transcribe audio";

pub struct RelayService {
    credentials: CredentialTable,
    sheet: Arc<dyn SheetAppender>,
    speech: Arc<dyn SpeechRecognizer>,
    clock: Arc<dyn Clock>,
}

impl RelayService {
    pub fn new(
        credentials: CredentialTable,
        sheet: Arc<dyn SheetAppender>,
        speech: Arc<dyn SpeechRecognizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        RelayService {
            credentials,
            sheet,
            speech,
            clock,
        }
    }

    /// Exact-match credential check. Missing fields fail the same way a wrong
    /// password does.
    pub fn login(&self, email: Option<&str>, password: Option<&str>) -> Result<Role, ApiError> {
        let (Some(email), Some(password)) = (email, password) else {
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };
        match self.credentials.authenticate(email, password) {
            Some(role) => {
                tracing::info!(email, %role, "login succeeded");
                Ok(role)
            }
            None => {
                tracing::info!(email, "login rejected");
                Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Appends `(name, career, today)` to the sheet. Empty strings count as
    /// missing.
    pub async fn record(
        &self,
        name: Option<&str>,
        career: Option<&str>,
    ) -> Result<SurveyRecord, ApiError> {
        let name = name.filter(|s| !s.is_empty());
        let career = career.filter(|s| !s.is_empty());
        let (Some(name), Some(career)) = (name, career) else {
            return Err(ApiError::BadRequest(MISSING_RECORD_FIELDS.to_string()));
        };

        let record = SurveyRecord::new(name, career, self.clock.today());
        self.sheet
            .append_row(&record.row())
            .await
            .map_err(|err| {
                ApiError::internal(RECORD_FAILED, format!("google sheets append failed: {}", err))
            })?;

        tracing::info!(
            name = %record.name,
            career = %record.career,
            date = %record.date,
            "record saved to google sheet"
        );
        Ok(record)
    }

    /// Decodes the data URI and returns the top transcript, or `""` when the
    /// recognizer found no speech.
    pub async fn transcribe(&self, audio_data: Option<&str>) -> Result<String, ApiError> {
        let Some(audio_data) = audio_data else {
            return Err(ApiError::BadRequest(NO_AUDIO_DATA.to_string()));
        };

        let audio = AudioPayload::from_data_uri(audio_data).map_err(|err| {
            ApiError::internal(TRANSCRIBE_FAILED, format!("audio decode failed: {}", err))
        })?;

        let transcript = self
            .speech
            .recognize(&audio)
            .await
            .map_err(|err| {
                ApiError::internal(TRANSCRIBE_FAILED, format!("speech-to-text failed: {}", err))
            })?;

        match transcript {
            Some(text) => {
                tracing::info!(transcript = %text, bytes = audio.len(), "speech transcribed");
                Ok(text)
            }
            None => {
                tracing::warn!(bytes = audio.len(), "speech recognition returned no results");
                Ok(String::new())
            }
        }
    }
}
