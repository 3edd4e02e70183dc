//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{data_dir, load_config, make_vault};

mod session;
pub use session::{sign_in, sign_out, sign_up, use_session, SessionProvider, SessionState};

mod theme;
pub use theme::stylesheet;

pub mod components;
pub mod views;

/// Read the [`store::AppConfig`] provided by the app root.
pub fn use_config() -> store::AppConfig {
    use_context::<store::AppConfig>()
}
