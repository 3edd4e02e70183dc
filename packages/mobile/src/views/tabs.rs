use dioxus::prelude::*;
use ui::views::{CreateProjectView, DiscoverView, MessagesView, ProfileView, SearchView};

use crate::Route;

#[component]
pub fn Discover() -> Element {
    let nav = use_navigator();
    rsx! {
        DiscoverView {
            on_open_project: move |id: String| tracing::info!("Open project {}", id),
            on_search: move |_| {
                nav.push(Route::Search {});
            },
        }
    }
}

#[component]
pub fn Search() -> Element {
    rsx! {
        SearchView {
            on_open_project: move |id: String| tracing::info!("Open project {}", id),
        }
    }
}

#[component]
pub fn Create() -> Element {
    rsx! {
        CreateProjectView {
            on_created: move |project: store::NewProject| {
                tracing::info!(
                    "Project created: {} (${}, {} skills)",
                    project.title,
                    project.budget,
                    project.skills.len()
                );
            },
        }
    }
}

#[component]
pub fn Messages() -> Element {
    rsx! {
        MessagesView {
            on_open_conversation: move |id: String| tracing::info!("Open conversation {}", id),
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfileView {
            on_edit_profile: move |_| tracing::info!("Edit profile"),
        }
    }
}
