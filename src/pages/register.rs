//! Registration page with the five-field sign-up form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form field signals and drives [`RegisterFlow`] through one
//! attempt: validate on submit, call the register endpoint, store the
//! session, then redirect once to the `returnUrl` destination (or home).
//! A visitor who is already signed in gets the same one-shot redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::pages::register_flow::{RegisterFlow, RegistrationInput};
use crate::state::auth::AuthState;
use crate::state::loading::LoadingState;
use crate::util::return_url::{self, RETURN_URL_PARAM};
use crate::util::session_redirect::RedirectGuard;

/// Registration page: five labeled fields, an inline message area, and
/// a one-shot redirect once a session exists.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loading = expect_context::<RwSignal<LoadingState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let flow = RwSignal::new(RegisterFlow::default());

    // Navigate once per mount when a session exists, whether it came out
    // of this form or was already present.
    let guard = RwSignal::new(RedirectGuard::default());
    Effect::new(move || {
        let state = auth.get();
        let mut fire = false;
        guard.update(|g| fire = g.fire_on_authed(&state));
        if !fire {
            return;
        }
        flow.update(RegisterFlow::mark_navigated);
        let destination =
            return_url::resolve(query.get_untracked().get(RETURN_URL_PARAM).as_deref());
        navigate(&destination, NavigateOptions::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = RegistrationInput {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            address: address.get(),
        };
        let mut accepted = None;
        flow.update(|f| accepted = f.submit(&input));
        let Some(accepted) = accepted else {
            return;
        };
        submit_registration(flow, auth, loading, accepted);
    };

    let login_href =
        return_url::forward("/login", query.get_untracked().get(RETURN_URL_PARAM).as_deref());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="name">
                        "Name"
                    </label>
                    <input
                        id="name"
                        class="auth-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />

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

                    <label class="auth-form__label" for="confirm-password">
                        "Confirm Password"
                    </label>
                    <input
                        id="confirm-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="address">
                        "Address"
                    </label>
                    <input
                        id="address"
                        class="auth-form__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />

                    <Show when=move || flow.with(|f| f.message().is_some())>
                        <p class="auth-form__message">
                            {move || flow.with(|f| f.message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || flow.with(RegisterFlow::is_submitting)
                    >
                        "Register"
                    </button>
                </form>
                <p class="auth-card__alt">
                    "Already have an account? "
                    <A href=login_href>"Login"</A>
                </p>
            </div>
        </div>
    }
}

/// Run an accepted submission against the register endpoint and settle
/// the flow with the outcome. The session lands in auth state; the
/// redirect effect owns the navigation.
fn submit_registration(
    flow: RwSignal<RegisterFlow>,
    auth: RwSignal<AuthState>,
    loading: RwSignal<LoadingState>,
    accepted: RegistrationInput,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            loading.update(LoadingState::begin);
            let result = crate::net::api::register(&accepted.to_request()).await;
            loading.update(LoadingState::end);
            match result {
                Ok(session) => {
                    flow.update(RegisterFlow::resolve_success);
                    auth.update(|a| a.user = Some(session));
                }
                Err(err) => {
                    log::warn!("register call failed: {err}");
                    flow.update(|f| f.resolve_failure(err.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (flow, auth, loading, accepted);
    }
}
