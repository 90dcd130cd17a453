//! Gate state machine and render policy.
//!
//! DESIGN
//! ======
//! A mount starts in `Checking` and moves exactly once, to either
//! `Authenticated` or `Redirecting`. Both are terminal; only a fresh mount
//! starts a new check.
//!
//! TRADE-OFFS
//! ==========
//! `RenderPolicy::Optimistic` shows the protected view while the check is in
//! flight, avoiding a loading flash at the cost of a brief unauthenticated
//! render. `RenderPolicy::Placeholder` withholds the view until the session is
//! confirmed.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;
use std::str::FromStr;

/// Fixed route the gate redirects to when no session is present.
pub const LOGIN_PATH: &str = "/login";

/// Lifecycle of one gate mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// The auth check is in flight.
    #[default]
    Checking,
    /// A session was confirmed; children stay rendered.
    Authenticated,
    /// No session (or the check failed); a login redirect was issued.
    Redirecting,
}

impl GateState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

/// What the gate renders while the check is still in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    #[default]
    Optimistic,
    Placeholder,
}

impl FromStr for RenderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Self::Optimistic),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(format!("unknown render policy: {other}")),
        }
    }
}

impl fmt::Display for RenderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Optimistic => "optimistic",
            Self::Placeholder => "placeholder",
        })
    }
}

/// Whether protected children are visible in `state` under `policy`.
#[must_use]
pub fn should_render(state: GateState, policy: RenderPolicy) -> bool {
    match state {
        GateState::Authenticated => true,
        GateState::Redirecting => false,
        GateState::Checking => policy == RenderPolicy::Optimistic,
    }
}
