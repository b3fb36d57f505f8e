//! Session gate: decides between the login screen and the console.
//!
//! The only persistent state is the token in the [`TokenStore`]. A stale token
//! is found out when an authenticated call comes back 401.

use crate::api::AdminApi;
use crate::error::ApiError;
use crate::http::{TokenStore, Transport};

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_UNAUTHORIZED: &str = "Unauthorized access. Please check your credentials.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    SignedOut,
    SignedIn,
}

impl Session {
    /// Startup check: a stored token means the console is shown.
    pub fn restore<S: TokenStore>(tokens: &S) -> Self {
        match tokens.load() {
            Some(token) if !token.is_empty() => Session::SignedIn,
            _ => Session::SignedOut,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn)
    }

    /// Clear the token and go back to the login screen, whatever the current
    /// state.
    pub fn sign_out<T: Transport, S: TokenStore>(self, api: &AdminApi<T, S>) -> Self {
        api.logout();
        Session::SignedOut
    }

    /// State after an API failure. A 401 ends the session.
    pub fn after_error(self, err: &ApiError) -> Self {
        if err.is_unauthorized() {
            Session::SignedOut
        } else {
            self
        }
    }
}

/// Message shown under the login form for a failed sign-in.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } => err.message_or(LOGIN_FAILED),
        _ => err.message_or(LOGIN_UNAUTHORIZED),
    }
}
