//! Tokio-backed auth gate: one detached session check per mount.
//!
//! DESIGN
//! ======
//! `mount` returns immediately with the gate in `Checking`, so the protected
//! view can commit before the check settles. The check runs on a spawned
//! task bounded by `GateConfig::check_timeout`; its result reaches the
//! navigator only through the mount's `Liveness` token. Dropping the
//! `MountHandle` is the unmount: it invalidates the token and aborts the task.
//!
//! Swapping the navigator or the protected subtree means dropping the handle
//! and mounting again; an in-flight check never sees the new target.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::check::run_check;
use crate::config::GateConfig;
use crate::error::GateError;
use crate::liveness::Liveness;
use crate::navigation::Navigator;
use crate::session::SessionUser;
use crate::state::{GateState, should_render};
use crate::verifier::SessionVerifier;

/// Navigator shared with spawned check tasks.
pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

/// Route-level auth gate with injected collaborators.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn SessionVerifier>,
    navigator: SharedNavigator,
    config: GateConfig,
}

impl AuthGate {
    #[must_use]
    pub fn new(verifier: Arc<dyn SessionVerifier>, navigator: SharedNavigator, config: GateConfig) -> Self {
        Self { verifier, navigator, config }
    }

    #[must_use]
    pub fn config(&self) -> GateConfig {
        self.config
    }

    /// Enter `Checking` and start the session check in the background.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(&self) -> MountHandle {
        let liveness = Liveness::new();
        let (state_tx, state_rx) = watch::channel(GateState::Checking);
        let (user_tx, user_rx) = watch::channel(None);

        let verifier = self.verifier.clone();
        let navigator = self.navigator.clone();
        let timeout = self.config.check_timeout;
        let task_liveness = liveness.clone();

        debug!(?timeout, policy = %self.config.render_policy, "auth gate mounted");
        let task = tokio::spawn(async move {
            let check = async {
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, verifier.verify_auth())
                        .await
                        .unwrap_or(Err(GateError::AuthCheckTimedOut(limit))),
                    None => verifier.verify_auth().await,
                }
            };
            if let Some(outcome) = run_check(&task_liveness, check, navigator.as_ref()).await {
                user_tx.send_replace(outcome.user().cloned());
                state_tx.send_replace(outcome.state());
            }
        });

        MountHandle {
            state: state_rx,
            user: user_rx,
            liveness,
            task,
            config: self.config,
        }
    }
}

/// One mount of the gate. Dropping it unmounts.
pub struct MountHandle {
    state: watch::Receiver<GateState>,
    user: watch::Receiver<Option<SessionUser>>,
    liveness: Liveness,
    task: JoinHandle<()>,
    config: GateConfig,
}

impl MountHandle {
    #[must_use]
    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    /// Whether the protected children are visible right now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        should_render(self.state(), self.config.render_policy)
    }

    /// Session user, once the check confirmed one.
    #[must_use]
    pub fn user(&self) -> Option<SessionUser> {
        self.user.borrow().clone()
    }

    /// Wait for a terminal state. Returns `Checking` if the check task ended
    /// without acting.
    pub async fn settled(&mut self) -> GateState {
        let settled = self
            .state
            .wait_for(|state| state.is_terminal())
            .await
            .map(|state| *state);
        settled.unwrap_or_else(|_| *self.state.borrow())
    }

    /// Tear down this mount; any pending result is discarded.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if self.liveness.is_live() {
            debug!("auth gate unmounted while checking");
        }
        self.liveness.invalidate();
        self.task.abort();
    }
}
