//! API schema types for request/response definitions.
//!
//! One sub-module per route. Request fields are optional so that a missing
//! field reaches the handler and is answered in the API envelope instead of
//! failing deserialization.

pub mod login;
pub mod record;
pub mod transcribe;
