//! Status message banner fed by the session state.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Banner showing the latest server confirmation or error text.
/// Hidden while the message is empty.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || !session.get().message.is_empty()>
            <div id="message" class="message-banner">{move || session.get().message}</div>
        </Show>
    }
}
