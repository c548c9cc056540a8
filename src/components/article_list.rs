//! Article list with per-entry edit and delete actions.

use leptos::prelude::*;

use crate::state::articles::ArticlesState;
use crate::state::session::SessionState;

/// Renders the cached article list. The entry currently loaded into the
/// form has its edit button disabled; all buttons are disabled while a
/// request is in flight.
#[component]
pub fn ArticleList(on_edit: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();

    view! {
        <div id="articles" class="article-list">
            <h2>"Articles"</h2>
            <Show
                when=move || !articles.get().items.is_empty()
                fallback=|| view! { <p>"No articles yet"</p> }
            >
                {move || {
                    let editing = articles.get().editing;
                    articles
                        .get()
                        .items
                        .into_iter()
                        .map(|article| {
                            let id = article.article_id;
                            view! {
                                <div class="article">
                                    <div>
                                        <h3>{article.title}</h3>
                                        <p>{article.text}</p>
                                        <p>{format!("Topic: {}", article.topic)}</p>
                                    </div>
                                    <div class="article__actions">
                                        <button
                                            disabled=move || {
                                                session.get().loading || editing == Some(id)
                                            }
                                            on:click=move |_| on_edit.run(id)
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            disabled=move || session.get().loading
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
