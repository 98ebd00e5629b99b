//! Full-screen loading overlay for in-flight API requests.
//!
//! DESIGN
//! ======
//! Reads the shared [`LoadingState`] counter from context; any tracked
//! request keeps the overlay mounted until the count drains.

use leptos::prelude::*;

use crate::state::loading::LoadingState;

/// Overlay with a spinner, shown while any tracked request is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.get().is_visible()>
            <div
                class="loading-overlay"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            >
                <div class="loading-overlay__spinner"></div>
            </div>
        </Show>
    }
}
