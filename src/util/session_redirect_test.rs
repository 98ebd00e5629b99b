use super::*;
use crate::net::types::Session;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(Session {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }),
        loading: false,
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn redirects_unauth_when_settled_and_user_missing() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn no_unauth_redirect_while_probing() {
    let state = AuthState::probing();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn no_unauth_redirect_when_signed_in() {
    assert!(!should_redirect_unauth(&signed_in()));
}

// =============================================================
// should_redirect_authed
// =============================================================

#[test]
fn redirects_authed_when_signed_in() {
    assert!(should_redirect_authed(&signed_in()));
}

#[test]
fn no_authed_redirect_without_user() {
    assert!(!should_redirect_authed(&AuthState::default()));
    assert!(!should_redirect_authed(&AuthState::probing()));
}

// =============================================================
// RedirectGuard
// =============================================================

#[test]
fn authed_guard_fires_once_per_mount() {
    let mut guard = RedirectGuard::default();
    assert!(guard.fire_on_authed(&signed_in()));
    assert!(!guard.fire_on_authed(&signed_in()));
}

#[test]
fn authed_guard_waits_for_a_session() {
    let mut guard = RedirectGuard::default();
    assert!(!guard.fire_on_authed(&AuthState::probing()));
    assert!(!guard.fire_on_authed(&AuthState::default()));
    assert!(guard.fire_on_authed(&signed_in()));
}

#[test]
fn consumed_guard_stays_consumed_when_state_flaps() {
    let mut guard = RedirectGuard::default();
    assert!(guard.fire_on_authed(&signed_in()));
    assert!(!guard.fire_on_authed(&AuthState::default()));
    assert!(!guard.fire_on_authed(&signed_in()));
}

#[test]
fn unauth_guard_fires_once_after_probe_settles() {
    let mut guard = RedirectGuard::default();
    assert!(!guard.fire_on_unauth(&AuthState::probing()));
    assert!(guard.fire_on_unauth(&AuthState::default()));
    assert!(!guard.fire_on_unauth(&AuthState::default()));
}

#[test]
fn unauth_guard_never_fires_while_signed_in() {
    let mut guard = RedirectGuard::default();
    assert!(!guard.fire_on_unauth(&signed_in()));
    assert!(!guard.fire_on_unauth(&signed_in()));
}

// =============================================================
// login_destination
// =============================================================

#[test]
fn login_destination_from_home_has_no_return_url() {
    assert_eq!(login_destination("/"), "/login");
    assert_eq!(login_destination(""), "/login");
}

#[test]
fn login_destination_carries_attempted_path() {
    assert_eq!(login_destination("/profile"), "/login?returnUrl=%2Fprofile");
}

#[test]
fn login_destination_encodes_delimiters_in_the_path() {
    assert_eq!(
        login_destination("/docs&page"),
        "/login?returnUrl=%2Fdocs%26page"
    );
}
