use super::*;

#[test]
fn app_state_clones_share_config() {
    let state = test_helpers::test_app_state();
    let cloned = state.clone();
    assert_eq!(cloned.commerce.base_url, state.commerce.base_url);
}

#[test]
fn test_app_state_points_at_unreachable_upstream() {
    let state = test_helpers::test_app_state();
    assert!(state.commerce.base_url.starts_with("http://127.0.0.1:9"));
}
