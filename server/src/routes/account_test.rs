use axum::body::to_bytes;
use axum::http::header::SET_COOKIE;
use percent_encoding::percent_decode_str;
use shared::SanitizedUser;

use super::*;
use crate::state::test_helpers::test_app_state;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_7731__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_42__"), None);
}

#[test]
fn cookie_secure_https_inference_logic() {
    // Inference reads shared globals; test the scheme check directly to
    // avoid races with other tests touching the same env vars.
    assert!("https://shop.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// Cookie builders
// =============================================================================

#[test]
fn session_cookie_expires_24_hours_from_now() {
    let cookie = session_cookie(TOKEN_COOKIE, "tok-abc".to_owned(), false, true);
    let expires = cookie.expires_datetime().expect("expiry set");
    let expected = OffsetDateTime::now_utc() + SESSION_TTL;
    let drift = (expected - expires).abs();
    assert!(drift < Duration::seconds(60), "drift was {drift}");
}

#[test]
fn session_cookie_sets_scope_attributes() {
    let cookie = session_cookie(TOKEN_COOKIE, "tok-abc".to_owned(), true, true);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn user_session_cookie_is_script_readable() {
    let cookie = session_cookie(USER_COOKIE, "encoded".to_owned(), false, false);
    assert_eq!(cookie.http_only(), Some(false));
}

#[test]
fn expired_cookie_has_zero_max_age() {
    let cookie = expired_cookie(USER_COOKIE, false, false);
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.value(), "");
}

#[test]
fn encode_cookie_value_round_trips_user_json() {
    let user = SanitizedUser {
        id: "u-1".to_owned(),
        first_name: "Avery".to_owned(),
        email: None,
    };
    let json = serde_json::to_string(&user).expect("serialize");
    let encoded = encode_cookie_value(&json);
    assert!(!encoded.contains('{'), "braces must be escaped: {encoded}");
    assert!(!encoded.contains(';'));

    let decoded = percent_decode_str(&encoded).decode_utf8().expect("decode");
    let restored: SanitizedUser = serde_json::from_str(&decoded).expect("deserialize");
    assert_eq!(restored, user);
}

// =============================================================================
// Handlers — upstream unreachable, so login must fail closed.
// =============================================================================

#[tokio::test]
async fn login_failure_returns_401_without_cookies() {
    let state = test_app_state();
    let credential = OtpLogin { email: "a@b.com".to_owned(), otp: "123456".to_owned() };

    let resp = login(State(state), Json(credential)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(SET_COOKIE).is_none(), "no cookies on failure");

    let body = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let message = String::from_utf8(body.to_vec()).expect("utf8");
    assert!(message.contains("auth service unreachable"), "got {message:?}");
}

#[tokio::test]
async fn sign_out_clears_both_cookies() {
    let state = test_app_state();
    let resp = sign_out(State(state), CookieJar::new()).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<String> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().expect("header").to_owned())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("token=")));
    assert!(cookies.iter().any(|c| c.starts_with("user=")));
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}
