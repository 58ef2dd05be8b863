//! Backend installed when the Google clients could not be built.

use async_trait::async_trait;
use careerviz_core::AudioPayload;

use crate::error::GoogleError;
use crate::traits::{SheetAppender, SpeechRecognizer};

/// Fails every call with the startup error that caused it.
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Unavailable {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SheetAppender for Unavailable {
    async fn append_row(&self, _row: &[String]) -> Result<(), GoogleError> {
        Err(GoogleError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl SpeechRecognizer for Unavailable {
    async fn recognize(&self, _audio: &AudioPayload) -> Result<Option<String>, GoogleError> {
        Err(GoogleError::Unavailable(self.reason.clone()))
    }
}
