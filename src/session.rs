//! Session user record returned by the `/api/auth/me` endpoint.
//!
//! The gate never inspects this beyond presence; the fields are here for
//! pages that want to show who is signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Authenticated admin user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable user identifier.
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Authoring role (e.g. `"admin"`, `"editor"`).
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionUser {
    /// Name to show in the admin chrome, falling back to email, then id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}
