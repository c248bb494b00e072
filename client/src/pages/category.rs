//! Product-category landing page — route target for the menu links.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = move || params.with(|p| p.get("category").unwrap_or_default());
    let subcategory = move || params.with(|p| p.get("subcategory"));

    view! {
        <main class="category-page">
            <h1 class="category-page__title">{category}</h1>
            <Show when=move || subcategory().is_some()>
                <h2 class="category-page__subtitle">{move || subcategory().unwrap_or_default()}</h2>
            </Show>
            <p>"Products for this category are on their way."</p>
        </main>
    }
}
