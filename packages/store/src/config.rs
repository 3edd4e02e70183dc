//! # App configuration — `gigboard.toml`
//!
//! An optional TOML file in the app's data directory (filename:
//! [`AppConfig::filename`] = `"gigboard.toml"`). It is read once at startup.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! storage_key = "auth-storage"   # key the session is persisted under
//!
//! [feed]
//! default_filter = "all"         # all | remote | local
//!
//! [search]
//! popular_skills = ["Web Design", "React"]
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config, TOML (de)serialisation and file loading. |
//! | [`SessionConfig`] | Storage key for the persisted session. |
//! | [`FeedConfig`] | Which location filter the discovery feed starts on. |
//! | [`SearchConfig`] | Skill chips offered on the search tab. |
//!
//! Every section has a `Default`, so a missing or partial file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{LocationFilter, POPULAR_SKILLS};
use crate::vault::DEFAULT_SESSION_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `gigboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub default_filter: LocationFilter,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_popular_skills")]
    pub popular_skills: Vec<String>,
}

fn default_popular_skills() -> Vec<String> {
    POPULAR_SKILLS.iter().map(|s| s.to_string()).collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular_skills: default_popular_skills(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gigboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `gigboard.toml` from `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(dir.join(Self::filename()))?;
        Ok(Self::from_toml(&raw)?)
    }

    /// Like [`load_from`](Self::load_from), but a missing file gives the
    /// defaults and a broken one is logged and ignored.
    pub fn load_or_default(dir: &Path) -> Self {
        match Self::load_from(dir) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }
}
