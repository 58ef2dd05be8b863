//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `CAREERVIZ_BIND` | `0.0.0.0` |
//! | `CAREERVIZ_PORT` | `5000` |
//! | `CAREERVIZ_USERS_FILE` | built-in accounts |
//! | `CAREERVIZ_GOOGLE_CREDENTIALS` | see [`default_credentials_path`] |
//! | `CAREERVIZ_SHEET_ID` | the school's survey sheet |
//! | `CAREERVIZ_SHEET_RANGE` | `A1` |
//! | `CAREERVIZ_BODY_LIMIT` | 10 MiB |

use std::path::PathBuf;

use careerviz_core::{CoreError, CredentialTable};
use careerviz_google::{default_credentials_path, GoogleConfig};

use crate::state::DEFAULT_BODY_LIMIT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CAREERVIZ_PORT '{0}': expected 0-65535")]
    InvalidPort(String),

    #[error("invalid CAREERVIZ_BODY_LIMIT '{0}': expected a byte count")]
    InvalidBodyLimit(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub users_file: Option<PathBuf>,
    pub body_limit: usize,
    pub google: GoogleConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("CAREERVIZ_BIND").unwrap_or_else(|| "0.0.0.0".to_string());

        let port: u16 = match lookup("CAREERVIZ_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 5000,
        };

        let body_limit: usize = match lookup("CAREERVIZ_BODY_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBodyLimit(raw))?,
            None => DEFAULT_BODY_LIMIT,
        };

        let credentials_path = lookup("CAREERVIZ_GOOGLE_CREDENTIALS")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_credentials_path(lookup("USER").as_deref()));

        let mut google = GoogleConfig::new(credentials_path);
        if let Some(sheet_id) = lookup("CAREERVIZ_SHEET_ID") {
            google.sheet_id = sheet_id;
        }
        if let Some(range) = lookup("CAREERVIZ_SHEET_RANGE") {
            google.sheet_range = range;
        }

        Ok(ServerConfig {
            bind,
            port,
            users_file: lookup("CAREERVIZ_USERS_FILE").map(PathBuf::from),
            body_limit,
            google,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// The users file when configured, otherwise the built-in accounts.
    pub fn load_credentials(&self) -> Result<CredentialTable, CoreError> {
        match &self.users_file {
            Some(path) => CredentialTable::from_file(path),
            None => Ok(CredentialTable::builtin()),
        }
    }
}
