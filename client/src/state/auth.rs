//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context. Route guards read it, the login
//! flow writes it, and every mutation is mirrored to persistent storage under
//! `authToken` / `authUser` so a reload restores the session. The REST client
//! reads the token straight from storage, not from this signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::CustomUser;
use crate::routes::is_technician;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for the raw session token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";
/// Storage key for the JSON-serialized current user.
pub const USER_STORAGE_KEY: &str = "authUser";

/// Authentication state tracking the session token and current user.
///
/// `loading` stays true until the browser has restored the session from
/// storage; guards hold off redirecting while it is set so the SSR render
/// and first hydrated frame agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<CustomUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session has been restored.
    pub fn pending() -> Self {
        Self { token: None, user: None, loading: true }
    }

    /// Restore the session from `store`. A malformed user entry loads as `None`.
    ///
    /// A token without a user stays `loading` until the user is fetched, so
    /// guards do not judge the role before the groups are known.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.get_item(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let user = load_json::<Option<CustomUser>>(store, USER_STORAGE_KEY).flatten();
        let loading = token.is_some() && user.is_none();
        Self { token, user, loading }
    }

    /// True when a token is held but the user record has not arrived yet.
    pub fn needs_user(&self) -> bool {
        self.is_authenticated() && self.user.is_none()
    }

    /// Finish a pending user fetch. A rejected token ends the session.
    pub fn finish_user_fetch(&mut self, store: &impl KeyValueStore, fetched: Result<CustomUser, ApiError>) {
        match fetched {
            Ok(user) => self.set_user(store, user),
            Err(e) if e.is_unauthorized() => self.clear_token(store),
            Err(_) => {}
        }
        self.loading = false;
    }

    /// Replace the token and persist it.
    pub fn set_token(&mut self, store: &impl KeyValueStore, token: String) {
        store.set_item(TOKEN_STORAGE_KEY, &token);
        self.token = Some(token);
    }

    /// Replace the current user and persist it as JSON.
    pub fn set_user(&mut self, store: &impl KeyValueStore, user: CustomUser) {
        save_json(store, USER_STORAGE_KEY, &user);
        self.user = Some(user);
    }

    /// Drop token and user, removing both storage entries.
    pub fn clear_token(&mut self, store: &impl KeyValueStore) {
        self.token = None;
        store.remove_item(TOKEN_STORAGE_KEY);
        self.user = None;
        store.remove_item(USER_STORAGE_KEY);
    }

    /// True when a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// True when the current user belongs to a technician group.
    pub fn is_technician(&self) -> bool {
        self.user.as_ref().is_some_and(is_technician)
    }

    /// Name shown in page headers.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "me".to_owned(), |user| user.name.clone())
    }
}
