//! Core error types for careerviz-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building domain values from untrusted input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The audio string had no `,` separating the data-URI header from the payload.
    #[error("audio data is not a data URI: no ',' separator found")]
    MissingDataUriComma,

    /// The payload after the data-URI header was not valid base64.
    #[error("invalid base64 audio payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// A users file could not be read or parsed.
    #[error("invalid users file {path}: {reason}")]
    InvalidUsersFile { path: PathBuf, reason: String },
}
