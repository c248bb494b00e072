//! Account routes — OTP login and sign-out, session cookie management.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use shared::OtpLogin;
use time::{Duration, OffsetDateTime};

use crate::services::account as account_svc;
use crate::state::AppState;

/// Cookie holding the opaque session token.
const TOKEN_COOKIE: &str = "token";
/// Cookie holding the percent-encoded `SanitizedUser` JSON, readable by
/// client script for the menu greeting.
const USER_COOKIE: &str = "user";
/// Both session cookies expire this long after issuance.
const SESSION_TTL: Duration = Duration::hours(24);

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Percent-encode a cookie value so it survives the cookie grammar.
pub(crate) fn encode_cookie_value(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

/// Build a session cookie expiring [`SESSION_TTL`] from now.
pub(crate) fn session_cookie(name: &'static str, value: String, secure: bool, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .http_only(http_only)
        .expires(OffsetDateTime::now_utc() + SESSION_TTL)
        .build()
}

/// Build an immediately-expiring cookie that clears `name`.
pub(crate) fn expired_cookie(name: &'static str, secure: bool, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .http_only(http_only)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/account/login` — exchange an OTP credential for session cookies.
///
/// On success sets the `token` and `user` cookies, both expiring 24 hours
/// from now, and returns an empty JSON object. On failure returns 401 with
/// the auth backend's message as the body and sets no cookies.
pub async fn login(State(state): State<AppState>, Json(credential): Json<OtpLogin>) -> Response {
    let session = match account_svc::login(&state.http, &state.commerce, &credential).await {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "otp login rejected");
            return (StatusCode::UNAUTHORIZED, e.to_string()).into_response();
        }
    };

    let user_json = match serde_json::to_string(&session.user) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "user cookie serialization failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode user").into_response();
        }
    };

    let secure = cookie_secure();
    let jar = CookieJar::new()
        .add(session_cookie(TOKEN_COOKIE, session.token, secure, true))
        .add(session_cookie(USER_COOKIE, encode_cookie_value(&user_json), secure, false));
    (jar, Json(serde_json::json!({}))).into_response()
}

/// `GET /api/account/sign-out` — revoke the upstream session, clear cookies.
///
/// The upstream revoke is best-effort; the cookies are cleared either way.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(TOKEN_COOKIE).map(Cookie::value) {
        if let Err(e) = account_svc::sign_out(&state.http, &state.commerce, token).await {
            tracing::warn!(error = %e, "upstream sign-out failed");
        }
    }

    let secure = cookie_secure();
    let jar = CookieJar::new()
        .add(expired_cookie(TOKEN_COOKIE, secure, true))
        .add(expired_cookie(USER_COOKIE, secure, false));
    (jar, Json(serde_json::json!({})))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
