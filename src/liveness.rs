//! Per-mount liveness token.
//!
//! DESIGN
//! ======
//! Created when the gate mounts and invalidated when it is torn down. The
//! deferred check result may only act through `try_act`, which claims the
//! token (`Live -> Acted`) under the lock and runs the action after releasing
//! it. Once `invalidate` returns, no later `try_act` can fire. A token also
//! acts at most once, which caps a mount at a single redirect.
//!
//! The action runs unlocked because a redirect usually unmounts the gate, and
//! that unmount calls `invalidate` on the same token from inside the action.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Live,
    Acted,
    TornDown,
}

/// Shared flag tying a background check to the lifetime of its mount.
#[derive(Clone, Debug)]
pub struct Liveness {
    phase: Arc<Mutex<Phase>>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: Arc::new(Mutex::new(Phase::Live)) }
    }

    /// Run `action` if the mount is still live and has not acted yet.
    ///
    /// Returns `None` when the result must be discarded. `action` may call
    /// `invalidate` on any clone of this token.
    pub fn try_act<R>(&self, action: impl FnOnce() -> R) -> Option<R> {
        {
            let mut phase = self.lock();
            if *phase != Phase::Live {
                return None;
            }
            *phase = Phase::Acted;
        }
        Some(action())
    }

    /// Mark the mount torn down. Idempotent.
    pub fn invalidate(&self) {
        *self.lock() = Phase::TornDown;
    }

    /// `true` until the token acts or is invalidated.
    pub(crate) fn is_live(&self) -> bool {
        *self.lock() == Phase::Live
    }

    #[cfg(test)]
    pub(crate) fn is_torn_down(&self) -> bool {
        *self.lock() == Phase::TornDown
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        // Poisoning only means another holder panicked; the phase is still valid.
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
