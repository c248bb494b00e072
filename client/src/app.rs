//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use shared::MenuEntry;

use crate::components::menu::Menu;
use crate::pages::{category::CategoryPage, home::HomePage, login::LoginPage};
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
/// Provides the auth context, loads the category menu, and keeps the
/// navigation menu mounted above the routed pages so it survives
/// client-side navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Categories are owned by the commerce backend; fetched once and
    // passed read-only to the menu.
    let categories = RwSignal::new(Vec::<MenuEntry>::new());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(menu) = crate::net::api::fetch_menu().await {
            categories.set(menu);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Menu categories=categories/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("product-category"), ParamSegment("category"))
                    view=CategoryPage
                />
                <Route
                    path=(
                        StaticSegment("product-category"),
                        ParamSegment("category"),
                        ParamSegment("subcategory"),
                    )
                    view=CategoryPage
                />
            </Routes>
        </Router>
    }
}
