use super::*;

fn config(base_url: &str) -> CommerceConfig {
    CommerceConfig { base_url: base_url.to_owned() }
}

// =============================================================================
// CommerceConfig::endpoint
// =============================================================================

#[test]
fn endpoint_joins_base_and_path() {
    let c = config("https://commerce.example.com/api");
    assert_eq!(c.endpoint("account/login"), "https://commerce.example.com/api/account/login");
}

#[test]
fn endpoint_normalizes_slashes() {
    let c = config("https://commerce.example.com/api/");
    assert_eq!(c.endpoint("/account/login"), "https://commerce.example.com/api/account/login");
}

// =============================================================================
// rejection_message
// =============================================================================

#[test]
fn rejection_message_prefers_upstream_body() {
    assert_eq!(rejection_message(401, "invalid one-time code"), "invalid one-time code");
}

#[test]
fn rejection_message_trims_body() {
    assert_eq!(rejection_message(401, "  expired code \n"), "expired code");
}

#[test]
fn rejection_message_falls_back_to_status() {
    assert_eq!(rejection_message(503, ""), "login rejected: 503");
    assert_eq!(rejection_message(401, "   "), "login rejected: 401");
}

// =============================================================================
// Wire payloads and errors
// =============================================================================

#[test]
fn login_success_deserializes_camel_case_user() {
    let body = r#"{"token":"tok-abc","user":{"id":"u-1","firstName":"Avery"}}"#;
    let parsed: LoginSuccess = serde_json::from_str(body).expect("deserialize");
    assert_eq!(parsed.token, "tok-abc");
    assert_eq!(parsed.user.first_name, "Avery");
}

#[test]
fn rejected_error_displays_message_verbatim() {
    let err = AccountError::Rejected("invalid one-time code".to_owned());
    assert_eq!(err.to_string(), "invalid one-time code");
}

#[test]
fn upstream_error_display_names_auth_service() {
    let err = AccountError::Upstream("connection refused".to_owned());
    assert_eq!(err.to_string(), "auth service unreachable: connection refused");
}

// =============================================================================
// Delegated calls against an unreachable upstream
// =============================================================================

#[tokio::test]
async fn login_maps_transport_failure_to_upstream_error() {
    let http = reqwest::Client::new();
    let c = config("http://127.0.0.1:9/api");
    let credential = OtpLogin { email: "a@b.com".to_owned(), otp: "123456".to_owned() };
    let err = login(&http, &c, &credential).await.expect_err("upstream is unreachable");
    assert!(matches!(err, AccountError::Upstream(_)));
}

#[tokio::test]
async fn sign_out_maps_transport_failure_to_upstream_error() {
    let http = reqwest::Client::new();
    let c = config("http://127.0.0.1:9/api");
    let err = sign_out(&http, &c, "tok-abc").await.expect_err("upstream is unreachable");
    assert!(matches!(err, AccountError::Upstream(_)));
}
