//! In-memory backends.
//!
//! [`RecordingSheet`] keeps every appended row and [`ScriptedRecognizer`]
//! replays a canned answer. Both count calls so tests can assert that a
//! handler reached (or did not reach) its collaborator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use careerviz_core::AudioPayload;

use crate::error::GoogleError;
use crate::traits::{SheetAppender, SpeechRecognizer};

/// A spreadsheet that lives in a `Vec`.
#[derive(Debug, Default)]
pub struct RecordingSheet {
    rows: Mutex<Vec<Vec<String>>>,
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl RecordingSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every append fails with `GoogleError::Status { status: 500, .. }`.
    pub fn failing(reason: impl Into<String>) -> Self {
        RecordingSheet {
            fail_with: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetAppender for RecordingSheet {
    async fn append_row(&self, row: &[String]) -> Result<(), GoogleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.fail_with {
            return Err(GoogleError::Status {
                status: 500,
                body: reason.clone(),
            });
        }
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(row.to_vec());
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Script {
    Transcript(Option<String>),
    Fail(String),
}

/// A recognizer that always gives the same answer.
#[derive(Debug)]
pub struct ScriptedRecognizer {
    script: Script,
    calls: AtomicUsize,
    last_audio_len: Mutex<Option<usize>>,
}

impl ScriptedRecognizer {
    fn with_script(script: Script) -> Self {
        ScriptedRecognizer {
            script,
            calls: AtomicUsize::new(0),
            last_audio_len: Mutex::new(None),
        }
    }

    pub fn hearing(transcript: impl Into<String>) -> Self {
        Self::with_script(Script::Transcript(Some(transcript.into())))
    }

    /// The service returns no results.
    pub fn silence() -> Self {
        Self::with_script(Script::Transcript(None))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(reason.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Byte length of the most recent audio submitted.
    pub fn last_audio_len(&self) -> Option<usize> {
        *self
            .last_audio_len
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn recognize(&self, audio: &AudioPayload) -> Result<Option<String>, GoogleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_audio_len
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(audio.len());
        match &self.script {
            Script::Transcript(t) => Ok(t.clone()),
            Script::Fail(reason) => Err(GoogleError::Status {
                status: 500,
                body: reason.clone(),
            }),
        }
    }
}
