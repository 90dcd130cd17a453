//! `verify_auth` collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate only needs "a user or nothing". `HttpSessionVerifier` answers that
//! by calling the site's session endpoint with the admin's bearer token.
//!
//! ERROR HANDLING
//! ==============
//! 401/403 mean "no session" and resolve `Ok(None)`. Anything else that is not
//! a 2xx with a decodable user becomes `GateError::AuthCheckFailed`, which the
//! gate treats as "no session" too, but logs separately.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::GateError;
use crate::session::SessionUser;

/// Answers "is there a valid session?" for one gate mount.
///
/// Called once per mount; implementations must settle and must not depend on
/// how many times they are called.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify_auth(&self) -> Result<Option<SessionUser>, GateError>;
}

/// Session check against `GET {base_url}{me_path}`.
#[derive(Clone, Debug)]
pub struct HttpSessionVerifier {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpSessionVerifier {
    #[must_use]
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.me_url(),
            token: config.token.clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SessionVerifier for HttpSessionVerifier {
    async fn verify_auth(&self) -> Result<Option<SessionUser>, GateError> {
        let Some(token) = self.token.as_deref() else {
            debug!("no auth token stored; skipping session request");
            return Ok(None);
        };

        let resp = self.client.get(&self.url).bearer_auth(token).send().await?;
        let status = resp.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(%status, "session endpoint rejected token");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(unexpected_status_error(status.as_u16()));
        }

        let user = resp.json::<SessionUser>().await?;
        Ok(Some(user))
    }
}

fn unexpected_status_error(status: u16) -> GateError {
    GateError::AuthCheckFailed(format!("session endpoint returned {status}"))
}
