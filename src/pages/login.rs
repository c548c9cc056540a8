//! Login page with username + password auth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::SessionState;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Build credentials from the raw field values, or explain what is wrong.
/// Both fields are trimmed before the length check.
fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.len() < MIN_USERNAME_LEN {
        return Err("Username must be at least 3 characters.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page — on success stores the token and moves to the articles screen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit_disabled = move || {
        session.get().loading
            || validate_credentials(&username.get(), &password.get()).is_err()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get().loading {
            return;
        }
        let Ok(credentials) = validate_credentials(&username.get(), &password.get()) else {
            return;
        };
        session.update(SessionState::begin_request);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(resp) => {
                        crate::util::token::store(&resp.token);
                        session.update(|s| s.finish(resp.message));
                        navigate("/articles", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        session.update(|s| s.finish(e.message().to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &navigate);
        }
    };

    view! {
        <form id="loginForm" class="login-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                id="username"
                type="text"
                placeholder="Enter username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                id="password"
                type="password"
                placeholder="Enter password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button id="submitCredentials" type="submit" disabled=submit_disabled>
                "Submit credentials"
            </button>
        </form>
    }
}
