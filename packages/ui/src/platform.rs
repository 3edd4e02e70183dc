//! Platform paths and storage constructors.
//!
//! Everything lives under `<data_dir>/gigboard/`: the persisted session
//! (via [`store::FileStore`]) and the optional `gigboard.toml`.

use std::path::{Path, PathBuf};

use store::{AppConfig, FileStore, KeyValueStore, SessionVault};

/// `<platform data dir>/gigboard`, or `./gigboard` when the platform has none.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gigboard")
}

/// Session vault backed by files under `dir`, normally [`data_dir`].
pub fn make_vault(dir: &Path, storage_key: &str) -> SessionVault<impl KeyValueStore> {
    SessionVault::with_key(FileStore::new(dir.to_path_buf()), storage_key)
}

pub fn load_config() -> AppConfig {
    AppConfig::load_or_default(&data_dir())
}
