//! Navigation capability injected into the gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate never reaches for a global router. Whoever mounts it hands in a
//! `Navigator`; in the browser that wraps `leptos_router`'s navigate, in
//! tests it records calls.

/// How a navigation affects the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    /// Overwrite the current entry so back-navigation skips the gated view.
    Replace,
}

impl HistoryMode {
    #[must_use]
    pub fn is_replace(self) -> bool {
        matches!(self, Self::Replace)
    }
}

/// Something that can move the user to another route.
pub trait Navigator {
    fn navigate(&self, path: &str, mode: HistoryMode);
}

/// Any closure navigates. No `Send` bound here: the browser router's closure
/// is not `Send`. See `SharedNavigator` for the threaded gate.
impl<F> Navigator for F
where
    F: Fn(&str, HistoryMode),
{
    fn navigate(&self, path: &str, mode: HistoryMode) {
        self(path, mode);
    }
}
