//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: member pages send
//! anonymous visitors to `/login`, and the admin console also turns away
//! accounts without a moderating role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::notify::{NoticeState, notify_error};
use crate::util::task::spawn_browser;

/// Whether a member-only page should leave for `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Whether the admin console should send the visitor home.
pub fn should_redirect_non_moderator(state: &AuthState) -> bool {
    !state.loading && state.is_logged_in() && !state.can_moderate()
}

/// Redirect to `/login` whenever auth has settled and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect non-moderators to `/home` with a notice.
pub fn install_moderator_redirect<F>(auth: RwSignal<AuthState>, notices: RwSignal<NoticeState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_moderator(&auth.get()) {
            notify_error(notices, "Administrator access required.");
            navigate("/home", NavigateOptions::default());
        }
    });
}

/// Load the current user for the stored session; a failure ends the session.
pub fn load_current_user(auth: RwSignal<AuthState>) {
    let email = auth.get_untracked().current_email();
    if !auth.get_untracked().is_logged_in() {
        auth.update(|a| a.loading = false);
        return;
    }
    spawn_browser(async move {
        match crate::net::users::current(email.as_deref()).await {
            Ok(user) => auth.update(|a| {
                a.user = Some(user);
                a.loading = false;
            }),
            Err(e) => {
                log::warn!("current user fetch failed: {e}");
                sign_out(auth);
            }
        }
    });
}

/// Clear the session everywhere.
pub fn sign_out(auth: RwSignal<AuthState>) {
    crate::util::storage::clear_session();
    auth.update(AuthState::sign_out);
}
