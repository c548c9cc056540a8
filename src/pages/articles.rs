//! Articles screen: list fetch on mount plus create, update, and delete flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every flow follows the same request lifecycle (`SessionState`), and every
//! authenticated failure funnels through one handler so a bad token always
//! lands back on the login screen no matter which action hit the 401.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::article_form::ArticleForm;
use crate::components::article_list::ArticleList;
use crate::net::types::ArticleDraft;
use crate::state::articles::ArticlesState;
use crate::state::session::SessionState;

/// Shared failure path: show the error and clear the loading flag; on an
/// unauthorized response additionally clear the token and return to login.
#[cfg(feature = "hydrate")]
fn handle_failure<F>(session: RwSignal<SessionState>, navigate: &F, err: &crate::net::api::ApiError)
where
    F: Fn(&str, NavigateOptions),
{
    log::error!("request failed: {err}");
    session.update(|s| s.finish(err.message().to_owned()));
    if err.is_unauthorized() {
        crate::util::token::clear();
        navigate("/", NavigateOptions::default());
    }
}

/// Articles screen — redirects to login when no token is stored, otherwise
/// fetches the list once on mount and wires the CRUD actions.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();
    let navigate = use_navigate();

    // Gate + initial fetch. Untracked reads keep the effect from re-running
    // when the request lifecycle flips the loading flag.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            let Some(token) = crate::util::token::load() else {
                navigate("/", NavigateOptions::default());
                return;
            };
            if session.get_untracked().loading {
                return;
            }
            session.update(SessionState::begin_request);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_articles(&token).await {
                        Ok(resp) => {
                            session.update(|s| s.finish(resp.message));
                            articles.update(|a| a.replace_all(resp.articles));
                        }
                        Err(e) => handle_failure(session, &navigate, &e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &token;
            }
        }
    });

    // Create or update, depending on whether an article is loaded into the
    // form. The editing reference resets after submit either way.
    let on_submit = Callback::new({
        let navigate = navigate.clone();
        move |draft: ArticleDraft| {
            if session.get_untracked().loading {
                return;
            }
            let Some(token) = crate::util::token::load() else {
                return;
            };
            let editing = articles.get_untracked().editing;
            session.update(SessionState::begin_request);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = match editing {
                        Some(id) => crate::net::api::update_article(&token, id, &draft).await,
                        None => crate::net::api::create_article(&token, &draft).await,
                    };
                    articles.update(|a| a.editing = None);
                    match result {
                        Ok(resp) => {
                            session.update(|s| s.finish(resp.message));
                            articles.update(|a| {
                                if editing.is_some() {
                                    a.apply_update(resp.article);
                                } else {
                                    a.append(resp.article);
                                }
                            });
                        }
                        Err(e) => handle_failure(session, &navigate, &e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&token, &draft, &editing, &navigate);
            }
        }
    });

    let on_delete = Callback::new({
        let navigate = navigate.clone();
        move |article_id: i64| {
            if session.get_untracked().loading {
                return;
            }
            let Some(token) = crate::util::token::load() else {
                return;
            };
            session.update(SessionState::begin_request);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_article(&token, article_id).await {
                        Ok(message) => {
                            session.update(|s| s.finish(message));
                            articles.update(|a| a.remove(article_id));
                        }
                        Err(e) => handle_failure(session, &navigate, &e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&token, &navigate);
            }
        }
    });

    let on_edit = Callback::new(move |article_id: i64| {
        articles.update(|a| a.editing = Some(article_id));
    });

    let on_cancel = Callback::new(move |()| {
        articles.update(|a| a.editing = None);
    });

    view! {
        <div class="articles-page">
            <ArticleForm on_submit=on_submit on_cancel=on_cancel/>
            <ArticleList on_edit=on_edit on_delete=on_delete/>
        </div>
    }
}
