//! Error types for careerviz-google.

use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to, or preparing to talk to, a Google API.
#[derive(Debug, Error)]
pub enum GoogleError {
    /// The credentials file could not be read.
    #[error("failed to read credentials {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file was not a usable service-account key.
    #[error("invalid service account key: {0}")]
    CredentialsParse(#[from] serde_json::Error),

    /// Signing the token assertion failed (usually a bad private key).
    #[error("jwt signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// A configured endpoint was not a valid base URL.
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Transport-level failure (connect, TLS, body read).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("google api returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered 2xx but the body was not what we expected.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// No client could be built at startup; every call fails with this.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}
