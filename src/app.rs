//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::loading::LoadingOverlay;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::loading::LoadingState;

/// Root application component.
///
/// Provides the shared state contexts, kicks off the one-time session
/// probe, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::probing());
    let loading = RwSignal::new(LoadingState::default());

    provide_context(auth);
    provide_context(loading);

    probe_session(auth);

    view! {
        <Title text="Portico"/>

        <Router>
            <LoadingOverlay/>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Resolve the startup session probe into auth state.
fn probe_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            match &user {
                Some(session) => log::info!("session restored for user {}", session.id),
                None => log::debug!("no existing session"),
            }
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        auth.update(|a| a.loading = false);
    }
}
