//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps one file per
//! key. It is used on mobile and desktop to keep the session across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── gigboard.toml         # optional app config, see crate::config
//! └── <key>.json            # raw value bytes
//! ```
//!
//! ## Platform data directories
//!
//! The UI obtains the base from [`dirs::data_dir()`](https://docs.rs/dirs):
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/gigboard/` |
//! | Linux | `~/.local/share/gigboard/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\gigboard\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Keys become file names, so path separators are replaced.
    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        std::fs::read(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: Vec<u8>) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        let path = self.entry_path(key);
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gigboard_{name}_{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_dir("file_store");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert!(store.get("auth-storage").await.is_none());
        store.set("auth-storage", b"{}".to_vec()).await;

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("auth-storage").await, Some(b"{}".to_vec()));
        assert!(dir.join("auth-storage.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_keys_cannot_escape_base() {
        let dir = temp_dir("file_store_escape");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("../outside", b"x".to_vec()).await;
        assert!(dir.join(".._outside.json").exists());
        assert_eq!(store.get("../outside").await, Some(b"x".to_vec()));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
