//! Shared wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Every backend endpoint answers with the same `{success, data}` or
//! `{success, message}` envelope. `User` is carried opaquely: the dashboard
//! only reads `name` and `email`, and any other field is kept so the stored
//! copy re-encodes with its full field set.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The operator returned by `/api/auth/login` and persisted with the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name shown in the header, falling back to the email, then a generic label.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Operator")
    }
}

/// Standard response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Credentials posted to `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` payload of a successful login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}
