//! Session token and auth token persistence.

use crate::{MemoryStore, Store};
use std::sync::Arc;

/// Key holding the server-issued session token.
pub const SESSION_ID_KEY: &str = "pulga_session_id";

/// Key holding the bearer auth token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Injectable accessor for the two persisted client tokens.
///
/// None of these operations fail outward: storage errors are logged and
/// reads degrade to "absent".
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn Store>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// A store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn session_id(&self) -> Option<String> {
        self.read(SESSION_ID_KEY)
    }

    pub fn set_session_id(&self, id: &str) {
        self.write(SESSION_ID_KEY, id);
    }

    pub fn clear_session_id(&self) {
        self.remove(SESSION_ID_KEY);
    }

    pub fn auth_token(&self) -> Option<String> {
        self.read(AUTH_TOKEN_KEY)
    }

    pub fn set_auth_token(&self, token: &str) {
        self.write(AUTH_TOKEN_KEY, token);
    }

    pub fn clear_auth_token(&self) {
        self.remove(AUTH_TOKEN_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read from store");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::warn!(key, error = %e, "failed to write to store");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.store.delete(key) {
            tracing::warn!(key, error = %e, "failed to delete from store");
        }
    }
}
