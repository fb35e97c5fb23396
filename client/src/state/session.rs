//! Owner session: auth token plus the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as an `RwSignal<SessionState>` context by `App`. The session
//! starts `loading`, is initialized from storage when the app hydrates, and is
//! torn down on logout or when the API rejects the token. Pages derive their
//! `ApiClient` from it instead of reading any global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiClient;
use crate::net::types::{AuthResponse, User};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for the persisted session.
pub const SESSION_KEY: &str = "wishingwall_session";

/// Persisted form of an established session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    user: User,
}

/// Authentication state for the current browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl SessionState {
    /// State before storage has been read (SSR and first hydration pass).
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Load the persisted session, if any.
    pub fn init(store: &impl KeyValueStore) -> Self {
        match load_json::<StoredSession>(store, SESSION_KEY) {
            Some(stored) if !stored.token.is_empty() => Self {
                token: Some(stored.token),
                user: Some(stored.user),
                loading: false,
            },
            _ => Self::default(),
        }
    }

    /// Adopt a fresh login/registration response and persist it.
    pub fn establish(&mut self, store: &impl KeyValueStore, auth: AuthResponse) {
        save_json(store, SESSION_KEY, &StoredSession { token: auth.access_token.clone(), user: auth.user.clone() });
        self.token = Some(auth.access_token);
        self.user = Some(auth.user);
        self.loading = false;
    }

    /// Drop the session and its persisted copy.
    pub fn teardown(&mut self, store: &impl KeyValueStore) {
        store.remove(SESSION_KEY);
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// API client carrying this session's token.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::with_token(self.token.clone())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(String::new, |u| u.full_name.clone())
    }
}
