//! Route guard for the protected dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! The decision itself is pure; `install_unauth_redirect` re-runs it whenever
//! auth state changes, which covers both navigation and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::Session;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Persisted storage has not been read yet.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Whether `session` may reach the protected screen.
pub fn admits(session: &Session) -> bool {
    session.is_authenticated()
}

pub fn guard(state: &AuthState) -> GuardDecision {
    if !state.loaded {
        GuardDecision::Pending
    } else if admits(&state.session) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Redirect whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard(&auth.get()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
