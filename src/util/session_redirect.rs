//! Shared session redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected
//! pages bounce signed-out visitors to the login route (carrying the
//! attempted path as `returnUrl`), and the auth pages bounce signed-in
//! visitors back into the app. Each installed redirect fires at most
//! once per mounted page; [`RedirectGuard`] owns that latch so the
//! one-shot contract tests natively.

#[cfg(test)]
#[path = "session_redirect_test.rs"]
mod session_redirect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::return_url::{self, HOME};

/// Whether a protected page should redirect to login: the session probe
/// has settled and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether an auth page should redirect away: a user is signed in.
#[must_use]
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.user.is_some()
}

/// One-shot latch for a mount's session redirect.
///
/// The first auth state that warrants the redirect consumes the guard;
/// once consumed it never fires again, so a re-rendered effect cannot
/// navigate twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    fired: bool,
}

impl RedirectGuard {
    /// Consume the guard when a protected page should bounce to login.
    pub fn fire_on_unauth(&mut self, state: &AuthState) -> bool {
        self.consume(should_redirect_unauth(state))
    }

    /// Consume the guard when an auth page should bounce away.
    pub fn fire_on_authed(&mut self, state: &AuthState) -> bool {
        self.consume(should_redirect_authed(state))
    }

    fn consume(&mut self, wanted: bool) -> bool {
        if self.fired || !wanted {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Login route for a redirect from `attempted`, carrying the attempted
/// path as `returnUrl` unless it was home anyway.
#[must_use]
pub fn login_destination(attempted: &str) -> String {
    if attempted == HOME {
        "/login".to_owned()
    } else {
        return_url::forward("/login", Some(attempted))
    }
}

/// Redirect to the login route once auth has settled with no user.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, attempted: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let destination = login_destination(&attempted);
    let guard = RwSignal::new(RedirectGuard::default());
    Effect::new(move || {
        let state = auth.get();
        let mut fire = false;
        guard.update(|g| fire = g.fire_on_unauth(&state));
        if fire {
            navigate(&destination, NavigateOptions::default());
        }
    });
}

/// Redirect a signed-in visitor away from an auth page to `destination`.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, destination: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = RwSignal::new(RedirectGuard::default());
    Effect::new(move || {
        let state = auth.get();
        let mut fire = false;
        guard.update(|g| fire = g.fire_on_authed(&state));
        if fire {
            navigate(&destination, NavigateOptions::default());
        }
    });
}
