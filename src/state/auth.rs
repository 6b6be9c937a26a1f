//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rendered view is a pure function of session presence: `user` set
//! renders the profile card, absent renders the auth card. `busy` is true
//! strictly between submit dispatch and resolution and only gates the
//! submit controls.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthError, User};

/// Authentication state: the signed-in user (if any) and the in-flight
/// submit flag.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub busy: bool,
}

impl AuthState {
    /// Mark a submit as dispatched.
    pub fn begin_submit(&mut self) {
        self.busy = true;
    }

    /// Resolve a submit: store the user on success, leave the session
    /// untouched on failure. Either way the busy flag clears.
    pub fn finish_submit(&mut self, outcome: &Result<User, AuthError>) {
        self.busy = false;
        if let Ok(user) = outcome {
            self.user = Some(user.clone());
        }
    }

    /// Local sign-out. No network call is involved.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.busy = false;
    }
}
