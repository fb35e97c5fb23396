//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owner routes (dashboard, wall admin) apply identical unauthenticated
//! redirect behavior, and treat a rejected token the same way as a logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

/// Whether an owner route should bounce to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded and is signed out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// End the session if the API rejected its token (401); the redirect effect
/// then takes the user to `/login`. A 403 only means this resource belongs to
/// someone else, so the session stays.
pub fn expire_on_unauthorized(session: RwSignal<SessionState>, error: &ApiError) {
    if error.is_unauthorized() {
        session.update(|s| s.teardown(&BrowserStorage));
    }
}
