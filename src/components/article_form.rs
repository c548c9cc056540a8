//! Article form — create mode and edit mode over the same fields.

#[cfg(test)]
#[path = "article_form_test.rs"]
mod article_form_test;

use leptos::prelude::*;

use crate::net::types::ArticleDraft;
use crate::state::articles::ArticlesState;
use crate::state::session::SessionState;

/// Topics the server accepts.
pub const TOPICS: [&str; 3] = ["JavaScript", "React", "Node"];

/// Heading above the form, switching with the mode.
fn form_title(editing: bool) -> &'static str {
    if editing { "Edit Article" } else { "Create Article" }
}

/// Whether the form fields need reloading, given the editing reference the
/// form last applied. First run always loads; after that only a change of
/// reference counts, so list updates finishing in the background cannot
/// clobber a draft in progress.
fn should_resync(last_applied: Option<Option<i64>>, current: Option<i64>) -> bool {
    last_applied != Some(current)
}

/// Build a draft from the raw field values, or explain what is missing.
/// Title and text are trimmed; the topic must be one of [`TOPICS`].
fn validate_draft(title: &str, text: &str, topic: &str) -> Result<ArticleDraft, &'static str> {
    let title = title.trim();
    let text = text.trim();
    if title.is_empty() || text.is_empty() {
        return Err("Enter a title and some text first.");
    }
    if !TOPICS.contains(&topic) {
        return Err("Pick one of the listed topics.");
    }
    Ok(ArticleDraft {
        title: title.to_owned(),
        text: text.to_owned(),
        topic: topic.to_owned(),
    })
}

/// Create/edit form. Fields are loaded from the article referenced by
/// `ArticlesState::editing` and cleared when that reference goes away.
#[component]
pub fn ArticleForm(
    on_submit: Callback<ArticleDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();

    let title = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());

    // Load fields only when the editing reference itself changes. The
    // effect re-runs on every state change, but `should_resync` keeps a
    // mid-draft fetch or unrelated delete from wiping the fields.
    Effect::new(move |last_applied: Option<Option<i64>>| {
        let state = articles.get();
        let current = state.editing;
        if should_resync(last_applied, current) {
            match state.editing_article() {
                Some(article) => {
                    title.set(article.title.clone());
                    text.set(article.text.clone());
                    topic.set(article.topic.clone());
                }
                None => {
                    title.set(String::new());
                    text.set(String::new());
                    topic.set(String::new());
                }
            }
        }
        current
    });

    let is_editing = move || articles.get().editing.is_some();
    let submit_disabled = move || {
        session.get().loading || validate_draft(&title.get(), &text.get(), &topic.get()).is_err()
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Ok(draft) = validate_draft(&title.get(), &text.get(), &topic.get()) {
            on_submit.run(draft);
        }
    };

    view! {
        <form id="form" class="article-form" on:submit=submit>
            <h2>{move || form_title(is_editing())}</h2>
            <input
                id="title"
                type="text"
                placeholder="Enter title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                id="text"
                placeholder="Enter text"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <select
                id="topic"
                prop:value=move || topic.get()
                on:change=move |ev| topic.set(event_target_value(&ev))
            >
                <option value="">"-- Select topic --"</option>
                {TOPICS
                    .into_iter()
                    .map(|t| view! { <option value=t>{t}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <div class="article-form__actions">
                <button id="submitArticle" type="submit" disabled=submit_disabled>
                    "Submit"
                </button>
                <Show when=is_editing>
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}
