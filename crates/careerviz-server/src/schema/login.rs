//! Schema types for `/login`.

use careerviz_core::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields are kept as raw JSON: a non-string email or password is a failed
/// credential check, not a malformed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl LoginRequest {
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Decides which screens the front-end unlocks.
    pub role: Role,
}
