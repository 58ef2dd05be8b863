//! The collaborator seams the server depends on.
//!
//! Each trait is object safe so server-side holders can keep an
//! `Arc<dyn ...>` and swap implementations at startup.

use async_trait::async_trait;
use careerviz_core::AudioPayload;

use crate::error::GoogleError;

/// Appends rows to the survey spreadsheet.
#[async_trait]
pub trait SheetAppender: Send + Sync {
    /// Appends one row in a single call. Either the whole row lands or the
    /// call fails; no partial writes are attempted.
    async fn append_row(&self, row: &[String]) -> Result<(), GoogleError>;
}

/// Turns recorded audio into text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Returns the top transcript, or `None` when the service heard nothing.
    async fn recognize(&self, audio: &AudioPayload) -> Result<Option<String>, GoogleError>;
}

/// Supplies OAuth2 bearer tokens for API calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, GoogleError>;
}
