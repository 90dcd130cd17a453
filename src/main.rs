//! `gate-probe`: mount the auth gate once against a live site and report.
//!
//! Reads `SITE_BASE_URL`, `AUTH_ME_PATH`, `AUTH_TOKEN`, `AUTH_CHECK_TIMEOUT_MS`
//! and `AUTH_RENDER_POLICY`. Exits 0 when the session is valid and 1 when the
//! gate would redirect to login.

use std::process::ExitCode;
use std::sync::Arc;

use ngo_site::{AuthGate, EndpointConfig, GateConfig, GateState, HistoryMode, HttpSessionVerifier};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let endpoint = EndpointConfig::from_env();
    let config = GateConfig::from_env();
    let verifier = HttpSessionVerifier::new(&endpoint);
    tracing::info!(url = verifier.url(), has_token = endpoint.token.is_some(), "probing session endpoint");

    let navigator = |path: &str, mode: HistoryMode| {
        tracing::info!(%path, replace = mode.is_replace(), "gate requested navigation");
    };
    let gate = AuthGate::new(Arc::new(verifier), Arc::new(navigator), config);
    let active = gate.config();
    tracing::info!(timeout = ?active.check_timeout, policy = %active.render_policy, "gate configured");
    let mut handle = gate.mount();

    match handle.settled().await {
        GateState::Authenticated => {
            let who = handle.user().map(|u| u.display_name().to_owned()).unwrap_or_default();
            tracing::info!(user = %who, "session valid");
            ExitCode::SUCCESS
        }
        state => {
            tracing::warn!(?state, "no valid session; gate redirected to login");
            ExitCode::FAILURE
        }
    }
}
