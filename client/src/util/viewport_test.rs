use super::*;

#[test]
fn widths_at_or_below_767_are_mobile() {
    assert!(is_mobile_width(320.0));
    assert!(is_mobile_width(767.0));
}

#[test]
fn widths_above_767_are_desktop() {
    assert!(!is_mobile_width(767.1));
    assert!(!is_mobile_width(768.0));
    assert!(!is_mobile_width(1920.0));
}

#[test]
fn media_query_matches_the_boundary_constant() {
    assert_eq!(MOBILE_MEDIA_QUERY, "(max-width: 767px)");
    assert!((MOBILE_MAX_WIDTH_PX - 767.0).abs() < f64::EPSILON);
}

#[test]
fn initial_is_mobile_defaults_to_desktop_off_browser() {
    assert!(!initial_is_mobile());
}
