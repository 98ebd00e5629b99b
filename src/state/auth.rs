//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context from the app root. Route
//! guards and identity-aware components read it to coordinate redirects
//! and to decide what to render while the session probe is in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current user and the session probe.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// The signed-in user, when known.
    pub user: Option<Session>,
    /// True while the startup session probe is still in flight.
    pub loading: bool,
}

impl AuthState {
    /// State at app startup, before the session probe has answered.
    #[must_use]
    pub const fn probing() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}
