//! Core of the Gigboard app: models, the session state machine and its
//! persistence, catalog filtering, form state and fixture data. Nothing here
//! depends on the UI.

pub mod catalog;
pub mod config;
pub mod draft;
pub mod fixtures;
pub mod format;
pub mod kv;
pub mod models;
pub mod session;
pub mod vault;

mod file_store;
pub use file_store::FileStore;
mod memory;
pub use memory::MemoryStore;

pub use catalog::{filter_projects, LocationFilter, Query};
pub use config::AppConfig;
pub use draft::{DraftError, NewProject, ProjectDraft};
pub use kv::KeyValueStore;
pub use models::{Conversation, Project, ProjectStatus, Session, User, UserProfile};
pub use session::{AcceptNonEmpty, AuthError, SessionStore, Verifier};
pub use vault::SessionVault;
