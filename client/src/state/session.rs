//! Persisted identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only writer of the persisted token and profile.
//! The gateway reads the token from it on every request; the app bridges its
//! change notifications into the reactive `AuthState` that route guards read.
//!
//! TRADE-OFFS
//! ==========
//! Both fields are re-read from storage on every query, so a token written by
//! another tab is picked up on the next request. A profile that no longer
//! parses is dropped with a warning; the token beside it stays usable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::storage::Storage;
use crate::net::types::Profile;

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized profile.
pub const PROFILE_KEY: &str = "user";

/// Current identity: token and profile, each possibly absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

impl Session {
    /// Whether a usable token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.username.as_str())
    }
}

/// Handle returned by [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Shared handle over the persisted session. Clones observe the same storage
/// and the same subscriber list.
pub struct SessionStore<S: Storage> {
    storage: Arc<S>,
    listeners: Arc<Mutex<Listeners>>,
}

impl<S: Storage> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Read the persisted session. Never fails; malformed data reads as absent.
    pub fn session(&self) -> Session {
        Session {
            token: self.token(),
            profile: self.profile(),
        }
    }

    /// The persisted token, if present and non-blank.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn profile(&self) -> Option<Profile> {
        let raw = self.storage.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("discarding malformed persisted profile: {e}");
                None
            }
        }
    }

    /// Persist a freshly issued token and profile, then notify subscribers.
    pub fn set_session(&self, token: &str, profile: &Profile) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(profile) {
            Ok(raw) => self.storage.set(PROFILE_KEY, &raw),
            Err(e) => {
                log::warn!("profile not persisted: {e}");
                self.storage.remove(PROFILE_KEY);
            }
        }
        log::debug!("session set for {}", profile.username);
        self.notify();
    }

    /// Erase both persisted fields, then notify subscribers.
    pub fn clear_session(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PROFILE_KEY);
        log::debug!("session cleared");
        self.notify();
    }

    /// Register a callback invoked with the new session after every write.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners();
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Drop a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    fn listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        // Listeners may call back into the store; run them without the lock.
        let snapshot: Vec<Listener> = self.listeners().entries.iter().map(|(_, l)| Arc::clone(l)).collect();
        let session = self.session();
        for listener in snapshot {
            listener(&session);
        }
    }
}
