//! Browser cookie access for the `user` session cookie.
//!
//! ERROR HANDLING
//! ==============
//! Cookie reads are best-effort: a missing or malformed `user` cookie
//! reads as unauthenticated, with no error surfaced anywhere.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use percent_encoding::percent_decode_str;
use shared::SanitizedUser;

/// Name of the cookie holding the serialized [`SanitizedUser`].
pub const USER_COOKIE: &str = "user";

/// Extract a raw cookie value from a `document.cookie` string.
///
/// Matches the exact cookie name; the first entry wins.
#[must_use]
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split("; ")
        .find_map(|entry| entry.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

/// Decode and parse a percent-encoded [`SanitizedUser`] cookie value.
#[must_use]
pub fn parse_user_cookie(raw: &str) -> Option<SanitizedUser> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    serde_json::from_str(&decoded).ok()
}

/// Read the current user from `document.cookie`.
///
/// Returns `None` when the cookie is absent or malformed, or outside a
/// browser.
#[must_use]
pub fn read_user() -> Option<SanitizedUser> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html_doc = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html_doc.cookie().ok()?;
        parse_user_cookie(cookie_value(&cookies, USER_COOKIE)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
