//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Provided from the app root as an
//! `RwSignal` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the initial
/// restore-from-cookie fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the first `/api/auth/me` round trip settles. Guards wait
    /// on this before redirecting, so a signed-in user reloading a protected
    /// page is not bounced to login mid-restore.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record a sign-in or a restored session.
    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Record a sign-out or a failed session restore.
    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
