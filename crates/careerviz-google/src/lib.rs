//! Google collaborators for the career-visualizer relay.
//!
//! The relay depends on two remote services: a spreadsheet that receives
//! survey rows and a speech recognizer that turns recorded answers into text.
//! Both sit behind the [`SheetAppender`] and [`SpeechRecognizer`] traits so the
//! server can be wired to real clients, in-memory stand-ins, or the
//! [`Unavailable`] backend when credentials could not be loaded.
//!
//! # Modules
//!
//! - [`error`]: GoogleError enum with all failure modes
//! - [`credentials`]: service-account key file loading and path resolution
//! - [`auth`]: OAuth2 JWT-bearer token minting with caching
//! - [`traits`]: SheetAppender / SpeechRecognizer / TokenProvider seams
//! - [`sheets`]: Sheets `values:append` client
//! - [`speech`]: Speech `speech:recognize` client and wire types
//! - [`memory`]: in-memory backends for tests and offline runs
//! - [`unavailable`]: backend that fails every call with a fixed reason
//! - [`connect`]: startup wiring from a [`GoogleConfig`]

pub mod auth;
pub mod connect;
pub mod credentials;
pub mod error;
pub mod memory;
pub mod sheets;
pub mod speech;
pub mod traits;
pub mod unavailable;

pub use auth::{ServiceAccountAuth, StaticToken, SCOPES};
pub use connect::{connect, GoogleBackends, GoogleConfig};
pub use credentials::{default_credentials_path, ServiceAccountKey};
pub use error::GoogleError;
pub use memory::{RecordingSheet, ScriptedRecognizer};
pub use sheets::SheetsClient;
pub use speech::{RecognitionConfig, SpeechClient};
pub use traits::{SheetAppender, SpeechRecognizer, TokenProvider};
pub use unavailable::Unavailable;
