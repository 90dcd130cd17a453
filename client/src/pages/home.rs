//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"Welcome"</h1>
            <a href="/admin" class="home-admin-link">"Admin"</a>
        </main>
    }
}
