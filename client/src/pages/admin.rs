//! Admin landing page. Only ever mounted under `ProtectedRoute`.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::clear);
                navigate(
                    ngo_site::LOGIN_PATH,
                    leptos_router::NavigateOptions {
                        replace: true,
                        ..leptos_router::NavigateOptions::default()
                    },
                );
            });
        }
    };

    view! {
        <main class="admin-page">
            <header class="admin-header">
                <h1>"Site administration"</h1>
                <span class="admin-header__user">
                    {move || auth.get().display_name().map(str::to_owned).unwrap_or_default()}
                </span>
                <button class="admin-logout" on:click=on_logout>"Sign out"</button>
            </header>
        </main>
    }
}
