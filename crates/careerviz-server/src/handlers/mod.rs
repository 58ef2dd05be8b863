//! HTTP handler modules for the relay API.
//!
//! Each sub-module implements a thin handler that parses the request,
//! delegates to [`RelayService`](crate::service::RelayService), and returns a
//! JSON response. No business logic lives in handlers.

pub mod login;
pub mod record;
pub mod transcribe;
