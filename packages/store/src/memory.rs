use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for tests and previews.
///
/// Clones share the same map, so dropping every handle but one and building a
/// new vault on it behaves like an app restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: Vec<u8>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_and_set() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.get("auth-storage").await.is_none());

        store.set("auth-storage", b"first".to_vec()).await;
        store.set("auth-storage", b"second".to_vec()).await;

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("auth-storage").await, Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        handle.set("theme", b"dark".to_vec()).await;
        assert_eq!(store.get("theme").await, Some(b"dark".to_vec()));
    }
}
