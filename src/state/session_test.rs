use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_has_no_message() {
    let state = SessionState::default();
    assert!(state.message.is_empty());
}

#[test]
fn session_state_default_not_loading() {
    let state = SessionState::default();
    assert!(!state.loading);
}

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn begin_request_clears_message_and_raises_flag() {
    let mut state = SessionState {
        message: "stale".to_owned(),
        loading: false,
    };
    state.begin_request();
    assert!(state.message.is_empty());
    assert!(state.loading);
}

#[test]
fn finish_lowers_flag_and_sets_message() {
    let mut state = SessionState::default();
    state.begin_request();
    state.finish("Here are your articles!");
    assert!(!state.loading);
    assert_eq!(state.message, "Here are your articles!");
}

#[test]
fn finish_after_failure_keeps_error_text() {
    let mut state = SessionState::default();
    state.begin_request();
    state.finish("request failed: 500");
    assert!(!state.loading);
    assert_eq!(state.message, "request failed: 500");
}
