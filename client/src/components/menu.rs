//! Storefront navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the responsive menu chrome (category popover, account popover,
//! search and cart affordances) and owns the cookie-driven auth refresh on
//! route changes. Render output is a pure function of four independent
//! axes: user presence, the two popover anchors, and the mobile boolean.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use shared::MenuEntry;

use crate::state::auth::AuthState;
use crate::state::menu::{AnchorRect, MenuIconAction, MenuUiState, menu_icon_action};

/// Delay before re-reading the `user` cookie after a route change, giving
/// a login redirect time to land its `Set-Cookie` first.
pub(crate) const COOKIE_REFRESH_DELAY_MS: u64 = 200;

pub(crate) fn category_href(category: &str) -> String {
    format!("/product-category/{category}")
}

pub(crate) fn subcategory_href(category: &str, subcategory: &str) -> String {
    format!("/product-category/{category}/{subcategory}")
}

pub(crate) fn greeting_line(first_name: &str) -> String {
    format!("Hello, {first_name}")
}

/// Viewport rectangle of the element a popover should open under.
fn anchor_from_event(ev: &leptos::ev::MouseEvent) -> AnchorRect {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let rect = el.get_bounding_client_rect();
            return AnchorRect { left: rect.left(), bottom: rect.bottom(), width: rect.width() };
        }
        AnchorRect::default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        AnchorRect::default()
    }
}

/// Storefront navigation menu.
///
/// Reads the `user` cookie on route changes, guards the category popover
/// behind authentication, and swaps between the mobile and desktop render
/// paths at the 767px boundary.
#[component]
pub fn Menu(#[prop(into)] categories: Signal<Vec<MenuEntry>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_ui = RwSignal::new(MenuUiState::default());

    let is_mobile = RwSignal::new(crate::util::viewport::initial_is_mobile());
    crate::util::viewport::watch_is_mobile(is_mobile);

    let navigate = use_navigate();
    let location = use_location();

    // Liveness flag for async continuations: a torn-down menu must not
    // mutate state when a delayed read or sign-out completes late.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Route change: force the category popover closed, then re-read the
    // user cookie once the navigation's cookie writes have settled.
    {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        let pathname = location.pathname;
        Effect::new(move || {
            pathname.track();
            menu_ui.update(MenuUiState::close_desktop_menu);

            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(COOKIE_REFRESH_DELAY_MS)).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    auth.update(|a| a.user = crate::util::cookie::read_user());
                });
            }
        });
    }

    // Crossing the layout boundary renders a different subtree; any
    // in-progress popover state goes with it.
    Effect::new(move || {
        is_mobile.track();
        menu_ui.set(MenuUiState::default());
    });

    let navigate_menu = navigate.clone();
    let on_menu_click = Callback::new(move |ev: leptos::ev::MouseEvent| {
        match menu_icon_action(auth.with_untracked(AuthState::is_authenticated)) {
            MenuIconAction::OpenCategories => {
                let anchor = anchor_from_event(&ev);
                menu_ui.update(|m| m.open_desktop_menu(anchor));
            }
            MenuIconAction::RedirectLogin => navigate_menu("/login", NavigateOptions::default()),
        }
    });

    // Sign out: fire the request, then go home and drop the local user.
    // The response is never inspected; state clears either way.
    #[cfg(feature = "hydrate")]
    let on_sign_out = {
        let alive = alive.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                auth.update(AuthState::clear);
            });
        })
    };
    #[cfg(not(feature = "hydrate"))]
    let on_sign_out = Callback::new(move |()| {});

    view! {
        <header class="menu">
            <Show
                when=move || is_mobile.get()
                fallback=move || {
                    view! {
                        <DesktopMenu
                            categories=categories
                            menu_ui=menu_ui
                            on_menu_click=on_menu_click
                            on_sign_out=on_sign_out
                        />
                    }
                }
            >
                <MobileMenu on_menu_click=on_menu_click/>
            </Show>
        </header>
    }
}

/// Desktop layout: single primary row plus the anchored category popover.
#[component]
fn DesktopMenu(
    categories: Signal<Vec<MenuEntry>>,
    menu_ui: RwSignal<MenuUiState>,
    on_menu_click: Callback<leptos::ev::MouseEvent>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="menu__primary-row">
            <MenuIconButton on_click=on_menu_click/>
            <LogoButton height=80/>
            <SearchField/>
            <AccountAccess menu_ui=menu_ui on_sign_out=on_sign_out/>
            <CartButton/>
        </div>
        <Show when=move || menu_ui.get().desktop_menu_open() && !categories.get().is_empty()>
            <CategoryPopover categories=categories menu_ui=menu_ui/>
        </Show>
    }
}

/// Mobile layout: stacked rows, no account affordance or popover.
#[component]
fn MobileMenu(on_menu_click: Callback<leptos::ev::MouseEvent>) -> impl IntoView {
    view! {
        <div class="menu__mobile">
            <div class="menu__mobile-row">
                <div class="menu__mobile-left">
                    <MenuIconButton on_click=on_menu_click/>
                    <LogoButton height=60/>
                </div>
                <CartButton/>
            </div>
            <div class="menu__mobile-search">
                <SearchField/>
            </div>
        </div>
    }
}

#[component]
fn MenuIconButton(on_click: Callback<leptos::ev::MouseEvent>) -> impl IntoView {
    view! {
        <button
            class="menu__icon-button"
            aria-label="Open category menu"
            on:click=move |ev| on_click.run(ev)
        >
            <span class="menu__icon-glyph" aria-hidden="true">"☰"</span>
        </button>
    }
}

#[component]
fn LogoButton(height: u32) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <button class="menu__logo" on:click=move |_| navigate("/", NavigateOptions::default())>
            <img src="/images/logo.png" height=height.to_string() alt="logo"/>
        </button>
    }
}

#[component]
fn SearchField() -> impl IntoView {
    view! { <input class="menu__search" type="text" aria-label="Search products"/> }
}

#[component]
fn CartButton() -> impl IntoView {
    view! {
        <button class="menu__cart" aria-label="Shopping cart">
            <span class="menu__cart-glyph" aria-hidden="true">"🛍"</span>
        </button>
    }
}

/// Greeting button and account popover; rendered only when a user is
/// present in the last cookie read.
#[component]
fn AccountAccess(menu_ui: RwSignal<MenuUiState>, on_sign_out: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_user_click = move |ev: leptos::ev::MouseEvent| {
        let anchor = anchor_from_event(&ev);
        menu_ui.update(|m| m.open_user_popover(anchor));
    };

    let user_anchor = move || menu_ui.get().user_account_anchor.unwrap_or_default();

    view! {
        <Show when=move || auth.with(AuthState::is_authenticated)>
            <button class="menu__account" on:click=on_user_click>
                <span class="menu__account-greeting">
                    {move || auth.with(|a| a.first_name().map(greeting_line)).unwrap_or_default()}
                </span>
                <span class="menu__account-caret" aria-hidden="true">"▾"</span>
            </button>
        </Show>
        // Backdrop and card are siblings so card clicks never hit the
        // backdrop's close handler.
        <Show when=move || menu_ui.get().user_popover_open()>
            <div
                class="popover-backdrop"
                on:click=move |_| menu_ui.update(MenuUiState::close_user_popover)
            ></div>
            <div
                class="popover popover--account"
                style=move || {
                    let a = user_anchor();
                    format!("left: {}px; top: {}px;", a.left, a.bottom)
                }
            >
                <button class="btn btn--outlined" on:click=move |_| on_sign_out.run(())>
                    "Sign Out"
                </button>
            </div>
        </Show>
    }
}

/// Anchored category popover: one column per category with its image,
/// primary link, and sub-category links. Any link click closes it.
#[component]
fn CategoryPopover(categories: Signal<Vec<MenuEntry>>, menu_ui: RwSignal<MenuUiState>) -> impl IntoView {
    let anchor = move || menu_ui.get().desktop_menu_anchor.unwrap_or_default();

    view! {
        <div
            class="popover-backdrop"
            on:click=move |_| menu_ui.update(MenuUiState::close_desktop_menu)
        ></div>
        <div
            class="popover popover--menu"
            style=move || {
                let a = anchor();
                format!("left: {}px; top: {}px;", a.center_x(), a.bottom)
            }
        >
            {move || {
                categories
                    .get()
                    .into_iter()
                    .map(|cat| view! { <CategoryColumn category=cat menu_ui=menu_ui/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn CategoryColumn(category: MenuEntry, menu_ui: RwSignal<MenuUiState>) -> impl IntoView {
    let image = category.images.first().cloned();
    let alt = category.name.clone();
    let primary_href = category_href(&category.name);
    let sub_links = category
        .sub_categories
        .iter()
        .map(|sub| {
            let href = subcategory_href(&category.name, &sub.name);
            let name = sub.name.clone();
            view! {
                <a
                    href=href
                    class="menu-popover__link menu-popover__link--secondary"
                    on:click=move |_| menu_ui.update(MenuUiState::close_desktop_menu)
                >
                    {name}
                </a>
            }
        })
        .collect::<Vec<_>>();
    let name = category.name.clone();

    view! {
        <div class="menu-popover__category">
            {image.map(|src| view! { <img src=src width="75" height="75" alt=alt.clone()/> })}
            <a
                href=primary_href
                class="menu-popover__link menu-popover__link--primary"
                on:click=move |_| menu_ui.update(MenuUiState::close_desktop_menu)
            >
                {name}
            </a>
            {sub_links}
        </div>
    }
}
