use super::*;

// =============================================================
// LoadingState defaults
// =============================================================

#[test]
fn loading_state_default_is_hidden() {
    let state = LoadingState::default();
    assert!(!state.is_visible());
}

// =============================================================
// begin / end
// =============================================================

#[test]
fn begin_shows_the_overlay() {
    let mut state = LoadingState::default();
    state.begin();
    assert!(state.is_visible());
}

#[test]
fn end_hides_after_last_request() {
    let mut state = LoadingState::default();
    state.begin();
    state.end();
    assert!(!state.is_visible());
}

#[test]
fn overlapping_requests_keep_overlay_up() {
    let mut state = LoadingState::default();
    state.begin();
    state.begin();
    state.end();
    assert!(state.is_visible());
    state.end();
    assert!(!state.is_visible());
}

#[test]
fn end_saturates_at_zero() {
    let mut state = LoadingState::default();
    state.end();
    assert!(!state.is_visible());
    state.begin();
    assert!(state.is_visible());
}
