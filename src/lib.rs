//! # ngo-site
//!
//! Route-level authentication gate for the NGO site's admin surface.
//!
//! A protected view mounts the gate, which asks an injected `verify_auth`
//! collaborator whether a session exists and, if not, replaces the current
//! history entry with `/login`. The core (`check`, `liveness`, `state`,
//! `navigation`) is executor-agnostic so the Leptos client in `client/` can
//! drive it from `spawn_local`; the `runtime` feature adds the tokio-backed
//! mount and the HTTP session verifier.

pub mod check;
pub mod config;
pub mod error;
pub mod liveness;
pub mod navigation;
pub mod session;
pub mod state;

#[cfg(feature = "runtime")]
pub mod gate;
#[cfg(feature = "runtime")]
pub mod verifier;

pub use check::{GateOutcome, classify, run_check};
pub use config::{EndpointConfig, GateConfig};
pub use error::GateError;
pub use liveness::Liveness;
pub use navigation::{HistoryMode, Navigator};
pub use session::SessionUser;
pub use state::{GateState, LOGIN_PATH, RenderPolicy, should_render};

#[cfg(feature = "runtime")]
pub use gate::{AuthGate, MountHandle, SharedNavigator};
#[cfg(feature = "runtime")]
pub use verifier::{HttpSessionVerifier, SessionVerifier};
