//! Schema types for `/record`.

use serde::{Deserialize, Serialize};

/// A student's chosen career, as submitted by the survey form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub career: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub message: String,
}
