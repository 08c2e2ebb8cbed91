//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the navigation bar and role-dependent controls. The
//! token and email mirror `localStorage`; the user record is fetched from
//! `/users/{email}` after login or on startup when a stored token exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::User;
use records::token::{Claims, decode_claims};

/// Authentication state tracking the session and current user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub email: Option<String>,
    pub user: Option<User>,
    /// Set while the current-user fetch is in flight.
    pub loading: bool,
}

impl AuthState {
    /// State the app mounts with on both server and browser. Nothing is read
    /// from storage here, so the first render matches the server's HTML;
    /// guards hold off until [`AuthState::restore`] replaces it.
    pub fn initial() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Session restored from stored values. `loading` is set when a token is
    /// present so guards wait for the user fetch.
    pub fn restore(token: Option<String>, email: Option<String>) -> Self {
        let loading = token.is_some();
        Self { token, email, user: None, loading }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn claims(&self) -> Option<Claims> {
        self.token.as_deref().and_then(decode_claims)
    }

    /// Email from the token subject, falling back to the stored email.
    pub fn current_email(&self) -> Option<String> {
        self.claims().map(|c| c.sub).or_else(|| self.email.clone())
    }

    /// Identifier used for enrollment and membership calls.
    pub fn current_user_id(&self) -> Option<String> {
        self.claims().map(|c| c.user_id().to_owned())
    }

    pub fn can_moderate(&self) -> bool {
        self.claims().is_some_and(|c| c.can_moderate())
    }

    /// Record a successful login. The user record is loaded separately.
    pub fn sign_in(&mut self, token: String, email: String) {
        self.token = Some(token);
        self.email = Some(email);
        self.user = None;
        self.loading = true;
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
