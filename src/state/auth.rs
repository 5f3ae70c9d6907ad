//! Process-wide authentication state.
//!
//! [`AuthStore`] wraps the reactive [`AuthState`] and keeps it in lockstep
//! with the session store: every mutation path updates storage and signal
//! before returning control, so the two can never disagree. There is no
//! background refresh and no expiry timer; staleness surfaces only when a
//! guarded navigation or API call fails.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::auth::{self, AuthError};
use crate::net::http::Transport;
use crate::net::types::{LoginCredentials, User};
use crate::session::{Session, SessionStore};

/// Reactive authentication snapshot exposed to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Injectable handle around the reactive auth state. `Copy`, so components
/// and spawned tasks can capture it freely.
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl AuthStore {
    /// Seed the state from whatever session the store currently holds.
    pub fn new(session: &SessionStore) -> Self {
        let user = session.read().map(|session| session.user);
        Self {
            state: RwSignal::new(AuthState { user }),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    /// Reactive: reads track the underlying signal.
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Log in against an explicit transport and session store, updating the
    /// reactive state together with storage.
    pub async fn login_with<T: Transport>(
        &self,
        transport: &T,
        session: &SessionStore,
        credentials: &LoginCredentials,
    ) -> Result<(), AuthError> {
        self.apply(auth::login_with(transport, session, credentials).await)
    }

    /// Log in against the shared transport and session store.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        self.apply(auth::login(credentials).await)
    }

    pub fn logout_with(&self, session: &SessionStore) {
        auth::logout(session);
        self.state.set(AuthState::default());
    }

    pub fn logout(&self) {
        self.logout_with(&SessionStore::shared());
    }

    fn apply(&self, result: Result<Session, AuthError>) -> Result<(), AuthError> {
        match result {
            Ok(session) => {
                self.state.set(AuthState {
                    user: Some(session.user),
                });
                Ok(())
            }
            Err(err) => {
                self.state.set(AuthState::default());
                Err(err)
            }
        }
    }
}
