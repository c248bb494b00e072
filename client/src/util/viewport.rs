//! Responsive layout detection (mobile vs desktop).
//!
//! The storefront switches render paths at the 767px boundary. The pure
//! width check is testable natively; the live `MediaQueryList`
//! subscription requires a browser and safely no-ops under SSR.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Widths at or below this render the mobile layout.
pub const MOBILE_MAX_WIDTH_PX: f64 = 767.0;

/// Media query matching the mobile layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

#[must_use]
pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_MAX_WIDTH_PX
}

/// Current media-query state, or `false` outside a browser.
#[must_use]
pub fn initial_is_mobile() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(MOBILE_MEDIA_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Keep `is_mobile` in sync with viewport changes.
///
/// The menu chrome is mounted once per document, so the change listener
/// is intentionally leaked rather than detached.
pub fn watch_is_mobile(is_mobile: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else { return };
        let Ok(Some(mql)) = window.match_media(MOBILE_MEDIA_QUERY) else { return };
        is_mobile.set(mql.matches());

        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| {
                is_mobile.set(ev.matches());
            },
        );
        mql.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        on_change.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = is_mobile;
    }
}
