//! # Session vault — persisting the session across restarts
//!
//! [`SessionVault`] pairs a [`KeyValueStore`] with the fixed key the session is
//! kept under. It exposes exactly two operations:
//!
//! | Method | When the app calls it |
//! |--------|-----------------------|
//! | [`load`](SessionVault::load) | Once at startup, to restore a [`SessionStore`](crate::SessionStore). |
//! | [`save`](SessionVault::save) | After every successful sign-in, sign-up and sign-out. |
//!
//! The stored value is JSON: `{"user": {...} | null, "isAuthenticated": bool}`.
//! Anything unreadable loads as [`Session::Anonymous`].

use crate::kv::KeyValueStore;
use crate::models::Session;

/// Key used when the configuration does not name one.
pub const DEFAULT_SESSION_KEY: &str = "auth-storage";

pub struct SessionVault<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionVault<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted session, or `Anonymous` if there is none.
    pub async fn load(&self) -> Session {
        let Some(raw) = self.store.get(&self.key).await else {
            return Session::Anonymous;
        };
        match serde_json::from_slice(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Discarding unreadable session under {:?}: {}", self.key, e);
                Session::Anonymous
            }
        }
    }

    /// Overwrite the persisted session.
    pub async fn save(&self, session: &Session) {
        match serde_json::to_vec(session) {
            Ok(bytes) => self.store.set(&self.key, bytes).await,
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::session::SessionStore;

    #[tokio::test]
    async fn test_empty_store_loads_anonymous() {
        let vault = SessionVault::new(MemoryStore::new());
        assert_eq!(vault.key(), DEFAULT_SESSION_KEY);
        assert_eq!(vault.load().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let backing = MemoryStore::new();

        let vault = SessionVault::new(backing.clone());
        let mut store = SessionStore::restore(vault.load().await);
        store.sign_in("dev@example.com", "pw").unwrap();
        vault.save(store.session()).await;
        drop(vault);

        // Simulated restart: fresh vault and store over the same storage.
        let vault = SessionVault::new(backing);
        let restored = SessionStore::restore(vault.load().await);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user(), store.user());
    }

    #[tokio::test]
    async fn test_sign_out_clears_persisted_session() {
        let backing = MemoryStore::new();
        let vault = SessionVault::new(backing.clone());

        let mut store = SessionStore::new();
        store.sign_up("Ada", "ada@example.com", "pw").unwrap();
        vault.save(store.session()).await;
        store.sign_out();
        vault.save(store.session()).await;

        let restored = SessionVault::new(backing).load().await;
        assert_eq!(restored, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_corrupt_value_loads_anonymous() {
        let backing = MemoryStore::new();
        backing.set(DEFAULT_SESSION_KEY, b"not json".to_vec()).await;

        let vault = SessionVault::new(backing);
        assert_eq!(vault.load().await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_custom_key() {
        let backing = MemoryStore::new();
        let vault = SessionVault::with_key(backing.clone(), "session-v2");

        let mut store = SessionStore::new();
        store.sign_in("dev@example.com", "pw").unwrap();
        vault.save(store.session()).await;

        assert!(backing.get("session-v2").await.is_some());
        assert!(backing.get(DEFAULT_SESSION_KEY).await.is_none());
    }
}
