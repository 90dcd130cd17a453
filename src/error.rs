//! Error kinds raised while checking a session.
//!
//! ERROR HANDLING
//! ==============
//! Both variants are caught at the gate boundary and collapse into the same
//! silent redirect to the login route. They exist so logs can tell a broken
//! collaborator apart from a slow one.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The `verify_auth` collaborator rejected (transport, status or decode failure).
    #[error("auth check failed: {0}")]
    AuthCheckFailed(String),
    /// The gate gave up waiting for the collaborator.
    #[error("auth check timed out after {}ms", .0.as_millis())]
    AuthCheckTimedOut(Duration),
}

#[cfg(feature = "runtime")]
impl From<reqwest::Error> for GateError {
    fn from(e: reqwest::Error) -> Self {
        Self::AuthCheckFailed(e.to_string())
    }
}
