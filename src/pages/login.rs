//! Login page for returning users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signs an existing user in and hands the session to auth state; the
//! shared authed-redirect helper then bounces to the `returnUrl`
//! destination (or home) exactly once.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::state::loading::LoadingState;
use crate::util::return_url::{self, RETURN_URL_PARAM};
use crate::util::session_redirect::install_authed_redirect;

/// Message shown when either credential field is blank.
const CREDENTIALS_REQUIRED: &str = "Email and password are required.";

/// Trim the email and require both fields. The password keeps its exact
/// value; only blank-ness is rejected.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Credential form with inline failure messages and a one-shot redirect
/// once signed in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loading = expect_context::<RwSignal<LoadingState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let destination = return_url::resolve(query.get_untracked().get(RETURN_URL_PARAM).as_deref());
    install_authed_redirect(auth, destination, navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                busy.set(true);
                message.set(String::new());
                submit_login(auth, loading, message, busy, email_value, password_value);
            }
            Err(text) => message.set(text.to_owned()),
        }
    };

    let register_href =
        return_url::forward("/register", query.get_untracked().get(RETURN_URL_PARAM).as_deref());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="text"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <Show when=move || !message.get().is_empty()>
                        <p class="auth-form__message">{move || message.get()}</p>
                    </Show>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        "Login"
                    </button>
                </form>
                <p class="auth-card__alt">
                    "New here? "
                    <A href=register_href>"Register"</A>
                </p>
            </div>
        </div>
    }
}

/// Run the login call and either hand the session to auth state (the
/// redirect helper navigates) or surface the failure inline.
fn submit_login(
    auth: RwSignal<AuthState>,
    loading: RwSignal<LoadingState>,
    message: RwSignal<String>,
    busy: RwSignal<bool>,
    email: String,
    password: String,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let request = crate::net::types::LoginRequest { email, password };
            loading.update(LoadingState::begin);
            let result = crate::net::api::login(&request).await;
            loading.update(LoadingState::end);
            match result {
                Ok(session) => {
                    // busy stays set; the authed redirect takes over.
                    auth.update(|a| a.user = Some(session));
                }
                Err(err) => {
                    log::warn!("login call failed: {err}");
                    message.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, loading, message, busy, email, password);
    }
}
