//! Persisted operator session (`token` + `user`) in durable storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only durable owner of the session. The auth context restores
//! from it on startup and writes through it on login/logout; the API client
//! reads the token from it on every request.
//!
//! INVARIANTS
//! ==========
//! Both keys are written together and cleared together. A stored `user` that
//! no longer decodes is treated as corrupt: both keys are removed and the
//! caller sees no session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
/// Read-only fallback for the bearer token.
pub const ALT_TOKEN_KEY: &str = "authToken";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored session, self-healing corrupt state.
    pub fn get(&self) -> Option<Session> {
        let raw_user = self.store.get_item(USER_KEY)?;
        let user = match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::warn!("stored user is corrupt, clearing session: {e}");
                self.clear();
                return None;
            }
        };
        let token = self.store.get_item(TOKEN_KEY)?;
        Some(Session { token, user })
    }

    pub fn set(&self, session: &Session) {
        let raw_user = match serde_json::to_string(&session.user) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("failed to encode user, session not stored: {e}");
                return;
            }
        };
        self.store.set_item(TOKEN_KEY, &session.token);
        self.store.set_item(USER_KEY, &raw_user);
    }

    pub fn clear(&self) {
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }
}

/// Token for the `Authorization` header: `token`, else `authToken`.
pub fn bearer_token<S: KeyValueStore>(store: &S) -> Option<String> {
    [TOKEN_KEY, ALT_TOKEN_KEY]
        .into_iter()
        .filter_map(|key| store.get_item(key))
        .find(|token| !token.is_empty())
}
