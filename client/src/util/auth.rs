//! Route guard rules shared by protected routes and the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! These guards improve UX only; the API still validates every token. The
//! decision is a pure function of `AuthState` so it can be re-evaluated on
//! every navigation and unit tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested destination unchanged.
    Render(String),
    /// Discard the attempted navigation and go here instead.
    Redirect(&'static str),
}

/// Decide what a navigation to `target` shows. Unauthenticated visitors are
/// sent to the login page; the target is not remembered.
pub fn guard(state: &AuthState, target: &str) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Render(target.to_owned())
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Where the login page should send an already-authenticated operator.
pub fn login_redirect(state: &AuthState) -> Option<&'static str> {
    state.is_authenticated().then_some(HOME_PATH)
}
