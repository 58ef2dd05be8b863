//! Recorded audio arriving from the browser as a data URI.
//!
//! The front-end posts `data:audio/webm;codecs=opus;base64,<payload>`. Only the
//! part after the first comma is audio; the header is discarded unread.

use base64::{engine::general_purpose, Engine as _};

use crate::error::CoreError;

/// Raw audio bytes decoded from a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload(Vec<u8>);

impl AudioPayload {
    /// Strips everything up to and including the first `,` and decodes the rest
    /// as standard base64.
    pub fn from_data_uri(data_uri: &str) -> Result<Self, CoreError> {
        let (_, encoded) = data_uri
            .split_once(',')
            .ok_or(CoreError::MissingDataUriComma)?;
        let bytes = general_purpose::STANDARD.decode(encoded.trim())?;
        Ok(AudioPayload(bytes))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        AudioPayload(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64 of the raw bytes, as JSON transports expect.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.0)
    }
}
