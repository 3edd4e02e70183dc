//! Project search: free text plus skill chips, re-filtered on every input.

use dioxus::prelude::*;
use store::catalog::results_summary;
use store::models::SkillLevel;
use store::{filter_projects, fixtures, Project, Query};

use crate::components::{ProjectCard, SkillTag};
use crate::icons::{FaMagnifyingGlass, FaSliders, FaXmark};
use crate::{use_config, Icon};

#[component]
pub fn SearchView(on_open_project: EventHandler<String>) -> Element {
    let config = use_config();
    let catalog = use_signal(fixtures::projects);
    let mut query = use_signal(Query::default);

    let results: Vec<Project> = filter_projects(&catalog.read(), &query.read())
        .into_iter()
        .cloned()
        .collect();
    let current = query();

    let toggle = move |skill: String| query.write().toggle_skill(&skill);

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-header",
                h1 { class: "screen-title", "Search Projects" }
            }

            div {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                input {
                    r#type: "search",
                    placeholder: "Search for projects...",
                    value: "{current.text}",
                    oninput: move |evt: FormEvent| query.write().text = evt.value(),
                }
                if !current.text.is_empty() {
                    button {
                        class: "icon-btn",
                        onclick: move |_| query.write().clear_text(),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }
                div { class: "divider" }
                Icon { icon: FaSliders, width: 18, height: 18 }
            }

            if !current.selected_skills().is_empty() {
                div {
                    class: "row wrap",
                    style: "padding: 0 20px;",
                    for skill in current.selected_skills() {
                        SkillTag {
                            key: "{skill}",
                            name: skill.clone(),
                            level: SkillLevel::Intermediate,
                            small: true,
                            selected: true,
                            onclick: toggle,
                        }
                    }
                }
            }

            if current.is_empty() {
                div {
                    class: "content",
                    h2 { class: "section-title", "Popular Skills" }
                    div {
                        class: "row wrap",
                        for skill in config.search.popular_skills.iter() {
                            SkillTag {
                                key: "{skill}",
                                name: skill.clone(),
                                small: true,
                                onclick: toggle,
                            }
                        }
                    }
                }
            }

            div {
                class: "content",
                if results.is_empty() {
                    div {
                        class: "empty",
                        h3 { "No projects found" }
                        p { class: "muted", "Try adjusting your search or filters" }
                    }
                } else {
                    p { class: "muted", "{results_summary(results.len())}" }
                    for project in results {
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
}
