//! The static credential table consulted by `/login`.
//!
//! The table is built once at startup, either from the built-in defaults or
//! from a JSON users file, and is read-only afterwards. Lookups are exact and
//! case-sensitive on the email key.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a logged-in user is allowed to see in the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// A stored credential. Passwords are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub role: Role,
}

/// Email -> credential mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable {
    users: HashMap<String, UserRecord>,
}

impl CredentialTable {
    pub fn new(users: HashMap<String, UserRecord>) -> Self {
        CredentialTable { users }
    }

    /// The accounts shipped with the school deployment.
    pub fn builtin() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "admin@school.com".to_string(),
            UserRecord {
                password: "password123".to_string(),
                role: Role::Admin,
            },
        );
        for teacher in ["teacher1", "teacher2", "teacher3"] {
            users.insert(
                format!("{}@school.com", teacher),
                UserRecord {
                    password: "user123".to_string(),
                    role: Role::User,
                },
            );
        }
        CredentialTable { users }
    }

    /// Parses a JSON object of `email -> {password, role}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a users file.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|err| CoreError::InvalidUsersFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|err| CoreError::InvalidUsersFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Returns the stored role when `email` exists and `password` matches exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<Role> {
        self.users
            .get(email)
            .filter(|user| user.password == password)
            .map(|user| user.role)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &UserRecord)> {
        self.users.iter()
    }
}
