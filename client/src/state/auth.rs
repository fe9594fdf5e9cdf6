//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `AuthState` mirrors the session store;
//! `SubmitState` drives the login and signup forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Reactive snapshot of the session store.
///
/// `loaded` stays `false` until the browser has read persisted storage, so
/// server-rendered and hydrated markup agree on the first frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loaded: bool,
}

impl AuthState {
    pub fn loaded(session: Session) -> Self {
        Self { session, loaded: true }
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }
}

/// Form submission lifecycle: `Idle -> Submitting -> {Succeeded, Failed}`.
///
/// `Failed` behaves as `Idle` with a message attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    /// Enter `Submitting`. Returns `false` and changes nothing if a request is
    /// already outstanding or has already succeeded.
    pub fn begin(&mut self) -> bool {
        match self {
            Self::Submitting | Self::Succeeded => false,
            Self::Idle | Self::Failed(_) => {
                *self = Self::Submitting;
                true
            }
        }
    }

    pub fn succeed(&mut self) {
        *self = Self::Succeeded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
