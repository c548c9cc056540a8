use super::*;

// =============================================================
// Draft validation
// =============================================================

#[test]
fn validate_draft_trims_title_and_text() {
    let draft = validate_draft("  Hooks  ", "  Effects explained.  ", "React").unwrap();
    assert_eq!(draft.title, "Hooks");
    assert_eq!(draft.text, "Effects explained.");
    assert_eq!(draft.topic, "React");
}

#[test]
fn validate_draft_rejects_blank_title() {
    assert_eq!(
        validate_draft("   ", "body", "React"),
        Err("Enter a title and some text first.")
    );
}

#[test]
fn validate_draft_rejects_blank_text() {
    assert_eq!(
        validate_draft("Title", "", "React"),
        Err("Enter a title and some text first.")
    );
}

#[test]
fn validate_draft_rejects_unknown_topic() {
    assert_eq!(
        validate_draft("Title", "body", "Gardening"),
        Err("Pick one of the listed topics.")
    );
    assert_eq!(
        validate_draft("Title", "body", ""),
        Err("Pick one of the listed topics.")
    );
}

#[test]
fn validate_draft_accepts_every_listed_topic() {
    for topic in TOPICS {
        assert!(validate_draft("Title", "body", topic).is_ok(), "topic {topic}");
    }
}

// =============================================================
// Field resync gating
// =============================================================

#[test]
fn first_run_always_loads_fields() {
    assert!(should_resync(None, None));
    assert!(should_resync(None, Some(1)));
}

#[test]
fn background_list_changes_keep_the_draft() {
    // A fetch or unrelated delete finishing mid-draft leaves the editing
    // reference as-is, so the fields must stay untouched.
    assert!(!should_resync(Some(None), None));
    assert!(!should_resync(Some(Some(7)), Some(7)));
}

#[test]
fn changing_the_editing_reference_reloads_fields() {
    assert!(should_resync(Some(None), Some(3)));
    assert!(should_resync(Some(Some(3)), Some(4)));
    assert!(should_resync(Some(Some(3)), None));
}

// =============================================================
// Form heading
// =============================================================

#[test]
fn form_title_switches_with_mode() {
    assert_eq!(form_title(false), "Create Article");
    assert_eq!(form_title(true), "Edit Article");
}
