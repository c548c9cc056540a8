use super::*;

fn article(id: i64, title: &str) -> Article {
    Article {
        article_id: id,
        title: title.to_owned(),
        text: "body".to_owned(),
        topic: "React".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn articles_state_default_is_empty_create_mode() {
    let state = ArticlesState::default();
    assert!(state.items.is_empty());
    assert!(state.editing.is_none());
    assert!(state.editing_article().is_none());
}

// =============================================================
// Cache reducers
// =============================================================

#[test]
fn replace_all_swaps_the_whole_cache() {
    let mut state = ArticlesState::default();
    state.append(article(1, "old"));
    state.replace_all(vec![article(2, "a"), article(3, "b")]);
    assert_eq!(state.items.len(), 2);
    assert!(state.items.iter().all(|a| a.article_id != 1));
}

#[test]
fn append_grows_list_by_exactly_one() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a"), article(2, "b")]);
    state.append(article(3, "c"));
    assert_eq!(state.items.len(), 3);
    assert!(state.items.iter().any(|a| a.article_id == 3));
}

#[test]
fn apply_update_replaces_matching_entry_in_place() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a"), article(2, "b"), article(3, "c")]);

    let mut updated = article(2, "b revised");
    updated.topic = "Node".to_owned();
    state.apply_update(updated);

    assert_eq!(state.items.len(), 3);
    let entry = state.items.iter().find(|a| a.article_id == 2).unwrap();
    assert_eq!(entry.title, "b revised");
    assert_eq!(entry.topic, "Node");
    // Order is preserved.
    assert_eq!(state.items[1].article_id, 2);
}

#[test]
fn apply_update_with_unknown_id_is_a_noop() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a")]);
    state.apply_update(article(99, "ghost"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "a");
}

#[test]
fn remove_drops_only_the_matching_entry() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a"), article(2, "b"), article(3, "c")]);
    state.remove(2);
    assert_eq!(state.items.len(), 2);
    assert!(state.items.iter().all(|a| a.article_id != 2));
}

#[test]
fn remove_unknown_id_leaves_list_unchanged() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a")]);
    state.remove(99);
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Editing reference
// =============================================================

#[test]
fn editing_article_resolves_by_id() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a"), article(2, "b")]);
    state.editing = Some(2);
    assert_eq!(state.editing_article().unwrap().title, "b");
}

#[test]
fn editing_article_is_none_when_id_left_the_cache() {
    let mut state = ArticlesState::default();
    state.replace_all(vec![article(1, "a")]);
    state.editing = Some(1);
    state.remove(1);
    assert!(state.editing_article().is_none());
}
