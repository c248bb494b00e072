//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! menu fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use shared::{MenuEntry, OtpLogin};

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("login failed: {status}")
    } else {
        trimmed.to_owned()
    }
}

/// Authenticate with a one-time password via `POST /api/account/login`.
///
/// The session cookies land via `Set-Cookie`; the success body is empty.
///
/// # Errors
///
/// Returns the endpoint's error message when the credential is rejected,
/// or a transport error string.
pub async fn login(credential: &OtpLogin) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/account/login")
            .json(credential)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(login_error_message(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
        Err("not available on server".to_owned())
    }
}

/// Sign out via `GET /api/account/sign-out`.
///
/// The response is not inspected; callers clear local state regardless.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::get("/api/account/sign-out").send().await;
    }
}

/// Fetch the category menu from `/api/catalog/menu`.
/// Returns `None` on failure or on the server.
pub async fn fetch_menu() -> Option<Vec<MenuEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/catalog/menu").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<MenuEntry>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
