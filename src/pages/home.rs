//! Home page shown to signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected landing route. Signed-out visitors are bounced to the
//! login route with this path carried as `returnUrl`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::session_redirect::install_unauth_redirect;

/// Greets the signed-in user; redirects to login otherwise.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    let attempted = location.pathname.get_untracked();
    install_unauth_redirect(auth, attempted, navigate);

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.email))
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <Show
                when=move || !auth.get().loading && auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <p class="home-page__status">
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    }
                }
            >
                <h1>"Welcome, " {move || identity().0}</h1>
                <p class="home-page__email">{move || identity().1}</p>
            </Show>
        </div>
    }
}
