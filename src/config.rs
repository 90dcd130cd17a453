//! Gate and session-endpoint configuration loaded from environment variables.
//!
//! Missing or unparseable values fall back to the defaults below; the gate
//! never refuses to start over configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::RenderPolicy;

const DEFAULT_CHECK_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_ME_PATH: &str = "/api/auth/me";

/// Tuning for a gate mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Upper bound on one auth check; `None` waits for the collaborator indefinitely.
    pub check_timeout: Option<Duration>,
    /// What to render while the check is in flight.
    pub render_policy: RenderPolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            check_timeout: Some(Duration::from_millis(DEFAULT_CHECK_TIMEOUT_MS)),
            render_policy: RenderPolicy::default(),
        }
    }
}

impl GateConfig {
    /// Load from `AUTH_CHECK_TIMEOUT_MS` (0 disables) and `AUTH_RENDER_POLICY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GateConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_ms = env_parse(&lookup, "AUTH_CHECK_TIMEOUT_MS", DEFAULT_CHECK_TIMEOUT_MS);
        Self {
            check_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            render_policy: env_parse(&lookup, "AUTH_RENDER_POLICY", RenderPolicy::default()),
        }
    }
}

/// Where and how to reach the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Site origin, e.g. `"https://example.org"`. No trailing slash.
    pub base_url: String,
    pub me_path: String,
    /// Bearer token for the current admin session, if any.
    pub token: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            me_path: DEFAULT_ME_PATH.to_owned(),
            token: None,
        }
    }
}

impl EndpointConfig {
    /// Load from `SITE_BASE_URL`, `AUTH_ME_PATH` and `AUTH_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(&lookup, "SITE_BASE_URL")
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.trim_end_matches('/').to_owned());
        let me_path = non_empty(&lookup, "AUTH_ME_PATH").map_or_else(
            || DEFAULT_ME_PATH.to_owned(),
            |path| if path.starts_with('/') { path } else { format!("/{path}") },
        );
        let token = non_empty(&lookup, "AUTH_TOKEN");
        Self { base_url, me_path, token }
    }

    /// Absolute URL of the session endpoint.
    #[must_use]
    pub fn me_url(&self) -> String {
        format!("{}{}", self.base_url, self.me_path)
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn env_parse<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
