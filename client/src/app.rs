//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// Everything under `/admin` is wrapped in `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/ngo-site.css"/>
        <Title text="NGO Site"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn AdminRoute() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AdminPage/>
        </ProtectedRoute>
    }
}
