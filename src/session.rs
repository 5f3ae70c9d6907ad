//! Durable session persistence.
//!
//! The session is a token + profile pair stored under two keys in browser
//! localStorage. The pair is written and cleared together; callers must
//! never observe one half without the other. localStorage has no native
//! transactions, so `save` writes the token first and then verifies both
//! keys are readable before reporting success.
//!
//! Browser storage only exists under the `hydrate` feature; native builds
//! (tests, the SSR host) fall back to an in-memory map with the same
//! contract, following the stub pattern used across `net`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::net::types::User;

/// localStorage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "userToken";
/// localStorage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "userData";

/// The persisted token + profile pair representing an authenticated client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The backing store did not retain both halves of the session.
    #[error("session was not fully persisted")]
    Incomplete,
}

/// Raw key/value storage the session store writes through.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory backend used natively and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Browser localStorage backend. Storage access can be denied (private
/// browsing, embedded contexts); reads then come back empty and writes are
/// dropped, which `save` detects through its read-back verification.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
impl BrowserBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Handle to the persisted session. Cheap to clone; all clones of the same
/// store observe the same underlying storage.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Fresh isolated in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        Self::new(BrowserBackend)
    }

    /// Process-wide default store: localStorage in the browser, a shared
    /// in-memory map elsewhere.
    pub fn shared() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            thread_local! {
                static SHARED: MemoryBackend = MemoryBackend::default();
            }
            SHARED.with(|backend| Self::new(backend.clone()))
        }
    }

    /// Persist the token + profile pair. Token goes first so a verifying
    /// reader never finds a profile without a token; both keys are read back
    /// before success is reported.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let profile = serde_json::to_string(&session.user).map_err(|_| SessionError::Incomplete)?;

        self.backend.set_item(TOKEN_KEY, &session.token);
        self.backend.set_item(USER_KEY, &profile);

        if self.backend.get_item(TOKEN_KEY).is_none() || self.backend.get_item(USER_KEY).is_none()
        {
            return Err(SessionError::Incomplete);
        }
        Ok(())
    }

    /// The stored session, or absent when either half is missing or the
    /// profile no longer parses. A divergent pair is treated as absent.
    pub fn read(&self) -> Option<Session> {
        let token = self.backend.get_item(TOKEN_KEY)?;
        let raw = self.backend.get_item(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                leptos::logging::warn!("stored profile is unreadable: {err}");
                None
            }
        }
    }

    /// Remove both halves. Never fails.
    pub fn clear(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get_item(TOKEN_KEY)
    }

    /// Cheap synchronous check used for route decisions: token presence
    /// only, the profile is not re-validated here.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
