//! Startup wiring: key file in, collaborator clients out.
//!
//! [`connect`] never fails. When the key cannot be loaded or a first token
//! cannot be minted, both collaborators are replaced by [`Unavailable`] and the
//! reason is logged, so the process keeps serving `/login` while record and
//! transcribe requests fail one by one.

use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::ServiceAccountAuth;
use crate::credentials::ServiceAccountKey;
use crate::error::GoogleError;
use crate::sheets::{SheetsClient, DEFAULT_RANGE, DEFAULT_SHEETS_BASE_URL};
use crate::speech::{SpeechClient, DEFAULT_SPEECH_BASE_URL};
use crate::traits::{SheetAppender, SpeechRecognizer, TokenProvider};
use crate::unavailable::Unavailable;

/// The survey sheet used by the school deployment.
pub const DEFAULT_SHEET_ID: &str = "1rRWk0sSMs2N-Jc1WiaLO544p1KLUcN0ctRezN6lZjq8";

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub credentials_path: PathBuf,
    pub sheet_id: String,
    pub sheet_range: String,
    pub sheets_base_url: String,
    pub speech_base_url: String,
    /// Replaces the key file's `token_uri` (emulators, tests).
    pub token_uri: Option<String>,
}

impl GoogleConfig {
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        GoogleConfig {
            credentials_path: credentials_path.into(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_range: DEFAULT_RANGE.to_string(),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            speech_base_url: DEFAULT_SPEECH_BASE_URL.to_string(),
            token_uri: None,
        }
    }
}

/// The pair of collaborators handed to the server state.
#[derive(Clone)]
pub struct GoogleBackends {
    pub sheet: Arc<dyn SheetAppender>,
    pub speech: Arc<dyn SpeechRecognizer>,
}

impl GoogleBackends {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let backend = Arc::new(Unavailable::new(reason));
        GoogleBackends {
            sheet: backend.clone(),
            speech: backend,
        }
    }
}

/// Builds real clients from `config`, degrading to [`Unavailable`] on error.
pub async fn connect(config: &GoogleConfig) -> GoogleBackends {
    match try_connect(config).await {
        Ok(backends) => {
            tracing::info!(
                sheet_id = %config.sheet_id,
                "connected to google apis"
            );
            backends
        }
        Err(err) => {
            tracing::error!(
                path = %config.credentials_path.display(),
                error = %err,
                "google credentials unavailable; check the key file and its sheet access"
            );
            GoogleBackends::unavailable(err.to_string())
        }
    }
}

async fn try_connect(config: &GoogleConfig) -> Result<GoogleBackends, GoogleError> {
    let mut key = ServiceAccountKey::from_file(&config.credentials_path)?;
    if let Some(token_uri) = &config.token_uri {
        key.token_uri = token_uri.clone();
    }
    let http = reqwest::Client::new();
    let auth = Arc::new(ServiceAccountAuth::new(key, http.clone())?);

    // Mint once so a revoked or mistyped key shows up in the startup log.
    auth.access_token().await?;

    let sheet = SheetsClient::new(http.clone(), auth.clone(), config.sheet_id.clone())
        .with_base_url(config.sheets_base_url.clone())
        .with_range(config.sheet_range.clone());
    let speech = SpeechClient::new(http, auth).with_base_url(config.speech_base_url.clone());

    Ok(GoogleBackends {
        sheet: Arc::new(sheet),
        speech: Arc::new(speech),
    })
}
