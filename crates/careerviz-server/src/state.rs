//! Application state shared by all handlers.
//!
//! [`AppState`] is cheap to clone: the service sits behind an `Arc` and is
//! never mutated after startup, so handlers need no locks.

use std::sync::Arc;

use careerviz_core::{Clock, CredentialTable, SystemClock};
use careerviz_google::{GoogleBackends, RecordingSheet, ScriptedRecognizer};

use crate::service::RelayService;

/// Matches the 10 MB JSON limit the front-end was built against; recorded
/// answers arrive base64-encoded inside the body.
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RelayService>,
    /// Largest accepted request body in bytes.
    pub body_limit: usize,
}

impl AppState {
    pub fn new(
        credentials: CredentialTable,
        backends: GoogleBackends,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let service = RelayService::new(credentials, backends.sheet, backends.speech, clock);
        AppState {
            service: Arc::new(service),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Built-in users, an in-memory sheet and a recognizer that hears
    /// nothing. For tests and offline front-end work.
    pub fn in_memory() -> Self {
        let backends = GoogleBackends {
            sheet: Arc::new(RecordingSheet::new()),
            speech: Arc::new(ScriptedRecognizer::silence()),
        };
        Self::new(CredentialTable::builtin(), backends, Arc::new(SystemClock))
    }
}
