//! Storefront landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <h1>"New Arrivals"</h1>
            <p>"Browse the category menu to explore the collection."</p>
        </main>
    }
}
