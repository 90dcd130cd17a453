//! Route wrapper that gates admin views behind a session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mount runs `net::api::verify_auth` once in the background (browser only)
//! and hands the result to `ngo_site::run_check`, which redirects to `/login`
//! with history replace unless a session came back. The mount's `Liveness`
//! token is invalidated in `on_cleanup`, so a check that settles after the
//! route is left never navigates.
//!
//! TRADE-OFFS
//! ==========
//! The default `RenderPolicy::Optimistic` paints children before the check
//! settles to avoid a loading flash. Routes that must not show anything to an
//! unauthenticated visitor pass `policy=RenderPolicy::Placeholder`.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use std::time::Duration;

use leptos::prelude::*;
use ngo_site::{GateState, Liveness, RenderPolicy, should_render};
#[cfg(any(test, feature = "hydrate"))]
use leptos_router::NavigateOptions;
#[cfg(any(test, feature = "hydrate"))]
use ngo_site::HistoryMode;

use crate::state::auth::AuthState;

/// Upper bound on one browser-side session check.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Cleanup hook for one mount: leaving the route discards its pending check.
fn invalidate_on_cleanup(liveness: &Liveness) -> impl FnOnce() + Send + Sync + 'static {
    let token = liveness.clone();
    move || token.invalidate()
}

#[cfg(any(test, feature = "hydrate"))]
fn navigate_options(mode: HistoryMode) -> NavigateOptions {
    NavigateOptions {
        replace: mode.is_replace(),
        ..NavigateOptions::default()
    }
}

/// Renders `children` while the visitor's session is (or may still be) valid.
#[component]
pub fn ProtectedRoute(#[prop(optional)] policy: RenderPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = RwSignal::new(GateState::Checking);
    let liveness = Liveness::new();

    on_cleanup(invalidate_on_cleanup(&liveness));

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_navigate;
        use ngo_site::{GateOutcome, run_check};

        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let navigator = move |path: &str, mode: HistoryMode| navigate(path, navigate_options(mode));
            let check = crate::net::api::verify_auth_with_timeout(CHECK_TIMEOUT);
            if let Some(outcome) = run_check(&liveness, check, &navigator).await {
                if let GateOutcome::Failed(e) = &outcome {
                    log::warn!("session check failed: {e}");
                }
                auth.update(|s| s.apply(&outcome));
                gate.set(outcome.state());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, liveness);

    view! {
        <Show
            when=move || should_render(gate.get(), policy)
            fallback=|| view! { <div class="gate-placeholder" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
