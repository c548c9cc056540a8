//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::message_banner::MessageBanner;
use crate::components::spinner::{Spinner, wrapper_opacity};
use crate::pages::{articles::ArticlesPage, login::LoginPage};
use crate::state::articles::ArticlesState;
use crate::state::session::SessionState;

/// Fixed banner text shown after logout.
pub const GOODBYE_MESSAGE: &str = "Goodbye!";

/// Nav destinations as (element id, href, label). The router intercepts
/// clicks on local anchors, so these stay client-side navigations.
const NAV_LINKS: [(&str, &str, &str); 2] = [
    ("loginScreen", "/", "Login"),
    ("articlesScreen", "/articles", "Articles"),
];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing
/// between the login and articles screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let articles = RwSignal::new(ArticlesState::default());

    provide_context(session);
    provide_context(articles);

    view! {
        <Stylesheet id="leptos" href="/pkg/newsroom.css"/>
        <Title text="Newsroom"/>

        <Router>
            <AppChrome/>
            <div
                id="wrapper"
                style=move || format!("opacity: {}", wrapper_opacity(session.get().loading))
            >
                <h1>"Newsroom"</h1>
                <nav>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, href, label)| view! { <a id=id href=href>{label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("articles") view=ArticlesPage/>
                </Routes>
            </div>
        </Router>
    }
}

/// Chrome rendered above the routed screens: spinner overlay, message
/// banner, and the logout control.
#[component]
fn AppChrome() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let articles = expect_context::<RwSignal<ArticlesState>>();
    let navigate = use_navigate();

    // Logout always lands on the login screen; the cached list goes with
    // the token so the next login starts clean.
    let on_logout = move |_| {
        crate::util::token::clear();
        session.update(|s| s.finish(GOODBYE_MESSAGE));
        articles.update(|a| {
            a.items.clear();
            a.editing = None;
        });
        navigate("/", NavigateOptions::default());
    };

    view! {
        <Spinner/>
        <MessageBanner/>
        <button id="logout" on:click=on_logout>
            "Logout from app"
        </button>
    }
}
