//! HTTP/JSON relay for the career-visualizer front-end.
//!
//! Three routes, each a thin handler over [`service::RelayService`]:
//! `/login` checks a static credential table, `/record` appends a survey row
//! to the results spreadsheet, and `/transcribe` sends recorded audio to
//! speech recognition. This crate contains the server framework, API schema
//! types, error handling, configuration, and route definitions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
