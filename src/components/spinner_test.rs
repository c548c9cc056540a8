use super::*;

#[test]
fn loading_text_matches_banner_copy() {
    assert_eq!(LOADING_TEXT, "Please wait...");
}

#[test]
fn wrapper_dims_while_loading() {
    assert_eq!(wrapper_opacity(true), "0.25");
}

#[test]
fn wrapper_fully_opaque_when_idle() {
    assert_eq!(wrapper_opacity(false), "1");
}
