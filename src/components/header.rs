//! Site header with brand and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Shows auth links for signed-out visitors and
//! the user's name plus logout for signed-in ones.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Site-wide header bar.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="site-header">
            <A href="/">
                <span class="site-header__brand">"Portico"</span>
            </A>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <nav class="site-header__nav">
                            <A href="/login">"Login"</A>
                            <A href="/register">"Register"</A>
                        </nav>
                    }
                }
            >
                <span class="site-header__user">{user_name}</span>
                <button class="btn site-header__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
