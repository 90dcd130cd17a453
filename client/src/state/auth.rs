//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by `ProtectedRoute` once its session check settles; read by admin
//! pages for identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use ngo_site::{GateOutcome, GateState, SessionUser};

/// Authentication state tracking the current user and the last gate result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub gate: GateState,
}

impl AuthState {
    /// Record a settled gate check.
    pub fn apply(&mut self, outcome: &GateOutcome<SessionUser>) {
        self.user = outcome.user().cloned();
        self.gate = outcome.state();
    }

    /// Forget the session (after logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(SessionUser::display_name)
    }
}
