//! Discovery feed: every project, narrowed by the All / Remote / Local buttons.

use dioxus::prelude::*;
use store::{fixtures, LocationFilter, Project};

use crate::components::{Button, ButtonSize, ButtonVariant, ProjectCard};
use crate::icons::{FaBell, FaMagnifyingGlass};
use crate::{use_config, use_session, Icon};

#[component]
pub fn DiscoverView(on_open_project: EventHandler<String>, on_search: EventHandler<()>) -> Element {
    let session = use_session();
    let config = use_config();
    let catalog = use_signal(fixtures::projects);
    let mut filter = use_signal(|| config.feed.default_filter);

    let first_name = session
        .read()
        .store
        .user()
        .and_then(|u| u.name.split_whitespace().next().map(str::to_string))
        .unwrap_or_else(|| "there".to_string());

    let visible: Vec<Project> = filter().apply(&catalog.read()).into_iter().cloned().collect();

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-header",
                div {
                    h1 { class: "screen-title", "Hello, {first_name}" }
                    p { class: "subtitle", "Find your next project" }
                }
                div {
                    class: "row",
                    Icon { icon: FaBell, width: 22, height: 22 }
                    button {
                        class: "icon-btn",
                        onclick: move |_| on_search.call(()),
                        Icon { icon: FaMagnifyingGlass, width: 22, height: 22 }
                    }
                }
            }

            div {
                class: "row",
                style: "padding: 0 20px; margin-bottom: 16px;",
                for option in LocationFilter::ALL {
                    Button {
                        key: "{option.label()}",
                        variant: button_variant(filter() == option),
                        size: ButtonSize::Sm,
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            div {
                class: "content",
                h2 { class: "section-title", "Recommended for you" }
                for project in visible {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_press: on_open_project,
                    }
                }
            }
        }
    }
}

fn button_variant(active: bool) -> ButtonVariant {
    if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    }
}
