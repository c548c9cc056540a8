//! Loading spinner shown while a request is in flight.

#[cfg(test)]
#[path = "spinner_test.rs"]
mod spinner_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Text shown inside the spinner overlay.
pub const LOADING_TEXT: &str = "Please wait...";

/// Opacity applied to the main content wrapper; dimmed while loading.
pub fn wrapper_opacity(loading: bool) -> &'static str {
    if loading { "0.25" } else { "1" }
}

/// Spinner overlay — rendered only while the session's loading flag is up.
#[component]
pub fn Spinner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().loading>
            <div id="spinner" class="spinner">{LOADING_TEXT}</div>
        </Show>
    }
}
