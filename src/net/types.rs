//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde handles the whole
//! boundary; `role` carries a display-only default for older records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by login and `/api/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account email address.
    pub email: String,
    /// Account role. Display-only default when the server omits it; never
    /// used for an authorization decision.
    #[serde(default = "default_role")]
    pub role: String,
    /// ISO 8601 registration timestamp. The login payload omits it; the
    /// `/api/user` payload includes it.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_role() -> String {
    "user".to_owned()
}

/// Successful login payload: a bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token proving the session.
    pub access_token: String,
    /// The freshly authenticated user.
    pub user: User,
}

/// Registration request body for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Server error envelope: `{ "error": "..." }` on any non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// User-displayable failure description.
    pub error: String,
}

/// Displayable authentication failure surfaced to the initiating form.
///
/// Carries either the server's `error` message or a generic transport
/// fallback; nothing here propagates past the form that started the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
