//! Shared busy indicator for in-flight API requests.
//!
//! DESIGN
//! ======
//! A request counter rather than a boolean, so overlapping requests keep
//! the overlay up until the last one settles. Provided as an
//! `RwSignal<LoadingState>` context from the app root; callers bracket
//! each request with `begin`/`end`.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Count of in-flight requests that should show the loading overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    active: u32,
}

impl LoadingState {
    /// Record the start of a tracked request.
    pub fn begin(&mut self) {
        self.active += 1;
    }

    /// Record the end of a tracked request. Saturates at zero so a stray
    /// `end` cannot wedge the counter below empty.
    pub fn end(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Whether the overlay should be visible.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.active > 0
    }
}
