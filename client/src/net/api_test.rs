use super::*;

#[test]
fn login_error_message_surfaces_endpoint_body() {
    assert_eq!(login_error_message(401, "invalid one-time code"), "invalid one-time code");
}

#[test]
fn login_error_message_trims_body() {
    assert_eq!(login_error_message(401, " expired code \n"), "expired code");
}

#[test]
fn login_error_message_falls_back_to_status() {
    assert_eq!(login_error_message(502, ""), "login failed: 502");
    assert_eq!(login_error_message(401, "   "), "login failed: 401");
}
