//! Persisted sign-in state.
//!
//! Pages never read storage directly: the frontend loads a [`Session`] once
//! through [`SessionStore`] and hands it down explicitly.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::AuthResponse;

pub const TOKEN_KEY: &str = "userToken";
pub const USER_KEY: &str = "userData";

/// Every key a token has ever been stored under
pub const LEGACY_TOKEN_KEYS: [&str; 4] = ["token", "userToken", "authToken", "access_token"];

/// String key-value storage, e.g. the browser's local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and non-browser callers
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Profile of the signed-in user as stored under `userData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn from_auth(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: SessionUser {
                id: response.id,
                name: response.name,
                email: response.email,
                role: response.role,
            },
        }
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Avatar letter: first character of the name, upper-cased
    pub fn initial(&self) -> String {
        self.user
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "A".to_string())
    }
}

pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Restore the saved session. A corrupt profile clears both keys.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let user_data = self.store.get(USER_KEY)?;
        if token.is_empty() {
            return None;
        }

        match serde_json::from_str::<SessionUser>(&user_data) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::error!("Error restoring session, clearing stored credentials: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => log::error!("Failed to serialize session user: {}", e),
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// Forget every token variant after the backend rejected the session
    pub fn purge_legacy_tokens(&self) {
        for key in LEGACY_TOKEN_KEYS {
            self.store.remove(key);
        }
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "abc.def".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "maria".to_string(),
                email: "maria@example.com".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    #[test]
    fn test_save_and_load() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert_eq!(sessions.load(), None);

        sessions.save(&session());
        assert_eq!(sessions.load(), Some(session()));

        let raw = sessions.inner().get(USER_KEY).unwrap();
        assert!(raw.contains("\"_id\":\"u1\""));
    }

    #[test]
    fn test_missing_profile_is_no_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc");
        let sessions = SessionStore::new(store);
        assert_eq!(sessions.load(), None);
        assert_eq!(sessions.inner().get(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn test_corrupt_profile_clears_both_keys() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc");
        store.set(USER_KEY, "{not json");
        let sessions = SessionStore::new(store);

        assert_eq!(sessions.load(), None);
        assert!(sessions.inner().is_empty());
    }

    #[test]
    fn test_purge_legacy_tokens() {
        let store = MemoryStore::new();
        for key in LEGACY_TOKEN_KEYS {
            store.set(key, "stale");
        }
        store.set(USER_KEY, "{}");
        store.set("theme", "dark");
        let sessions = SessionStore::new(store);

        sessions.purge_legacy_tokens();
        assert_eq!(sessions.inner().len(), 1);
        assert_eq!(sessions.inner().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_header_and_initial() {
        let session = session();
        assert_eq!(session.bearer_header(), "Bearer abc.def");
        assert_eq!(session.initial(), "M");
    }

    #[test]
    fn test_from_auth_response() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"_id":"u9","name":"Lee","email":"lee@example.com","role":"admin","token":"t"}"#,
        )
        .unwrap();
        let session = Session::from_auth(response);
        assert_eq!(session.user.id, "u9");
        assert_eq!(session.token, "t");
    }
}
