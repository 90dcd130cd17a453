//! Admin login page: email + password exchanged for a bearer token.
//!
//! This is the route `ProtectedRoute` redirects to; on success it sends the
//! user on to `/admin`, where the gate re-checks the fresh session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Trim and require both login fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(()) => {
                        password.set(String::new());
                        navigate("/admin", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
