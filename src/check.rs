//! Executor-agnostic core of the auth gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `run_check` is what both the tokio-backed `gate::AuthGate` and the browser
//! `ProtectedRoute` component drive: await the session check, classify it,
//! then act through the mount's `Liveness` token.
//!
//! ERROR HANDLING
//! ==============
//! A failed or timed-out check is logged and treated exactly like an absent
//! session. Nothing is returned to the caller that could crash the view tree.

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;

use std::future::Future;

use tracing::{debug, info, warn};

use crate::error::GateError;
use crate::liveness::Liveness;
use crate::navigation::{HistoryMode, Navigator};
use crate::state::{GateState, LOGIN_PATH};

/// How the gate interprets a settled check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome<U> {
    Authenticated(U),
    Unauthenticated,
    Failed(GateError),
}

impl<U> GateOutcome<U> {
    /// Terminal state this outcome drives the mount into.
    #[must_use]
    pub fn state(&self) -> GateState {
        match self {
            Self::Authenticated(_) => GateState::Authenticated,
            Self::Unauthenticated | Self::Failed(_) => GateState::Redirecting,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&U> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Map a raw `verify_auth` result onto a gate outcome.
pub fn classify<U>(result: Result<Option<U>, GateError>) -> GateOutcome<U> {
    match result {
        Ok(Some(user)) => GateOutcome::Authenticated(user),
        Ok(None) => GateOutcome::Unauthenticated,
        Err(e) => GateOutcome::Failed(e),
    }
}

/// Await `check`, then redirect to the login route unless a session came back.
///
/// Returns `None` when the mount was torn down before the check settled; in
/// that case `navigator` is never called.
pub async fn run_check<U, Fut, N>(liveness: &Liveness, check: Fut, navigator: &N) -> Option<GateOutcome<U>>
where
    Fut: Future<Output = Result<Option<U>, GateError>>,
    N: Navigator + ?Sized,
{
    let outcome = classify(check.await);

    let acted = liveness.try_act(|| match &outcome {
        GateOutcome::Authenticated(_) => {
            debug!("session verified; keeping protected view");
        }
        GateOutcome::Unauthenticated => {
            info!(path = LOGIN_PATH, "no session; redirecting to login");
            navigator.navigate(LOGIN_PATH, HistoryMode::Replace);
        }
        GateOutcome::Failed(e) => {
            warn!(error = %e, path = LOGIN_PATH, "auth check failed; redirecting to login");
            navigator.navigate(LOGIN_PATH, HistoryMode::Replace);
        }
    });

    if acted.is_none() {
        debug!(state = ?outcome.state(), "mount gone before auth check settled; discarding result");
        return None;
    }
    Some(outcome)
}
