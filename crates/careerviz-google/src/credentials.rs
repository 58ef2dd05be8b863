//! Service-account key files.
//!
//! The key file is the JSON document downloaded from the Cloud console. Only
//! the fields needed to mint tokens are read; the rest are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GoogleError;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// File name looked up when no explicit path is configured.
pub const CREDENTIALS_FILE_NAME: &str = "google-creds.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json_str(json: &str) -> Result<Self, GoogleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, GoogleError> {
        let text = std::fs::read_to_string(path).map_err(|source| GoogleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Where the key file lives when nothing is configured explicitly.
///
/// On the hosted deployment the account name is in `USER` and the key sits in
/// that user's project checkout; locally it sits next to the process.
pub fn default_credentials_path(user: Option<&str>) -> PathBuf {
    match user.filter(|u| !u.is_empty()) {
        Some(user) => PathBuf::from(format!(
            "/home/{}/career-visualizer/{}",
            user, CREDENTIALS_FILE_NAME
        )),
        None => PathBuf::from(CREDENTIALS_FILE_NAME),
    }
}
