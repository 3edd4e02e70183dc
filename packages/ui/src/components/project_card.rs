use dioxus::prelude::*;
use store::format::{format_budget, skill_preview};
use store::Project;

use super::{Avatar, AvatarSize, Badge, BadgeVariant, SkillTag};
use crate::icons::{FaClock, FaDollarSign, FaLocationDot, FaUsers};
use crate::Icon;

const SKILLS_SHOWN: usize = 3;

/// Summary card for one catalog project. Emits the project id when pressed.
#[component]
pub fn ProjectCard(project: Project, on_press: EventHandler<String>) -> Element {
    let (skills, more) = skill_preview(&project.skills, SKILLS_SHOWN);
    let place = if project.remote {
        "Remote".to_string()
    } else {
        project.location.clone().unwrap_or_default()
    };
    let id = project.id.clone();

    rsx! {
        div {
            class: "card",
            onclick: move |_| on_press.call(id.clone()),

            div {
                class: "card-header",
                div {
                    class: "row",
                    Avatar {
                        uri: project.client_avatar.clone(),
                        name: project.client_name.clone(),
                        size: AvatarSize::Sm,
                    }
                    span { "{project.client_name}" }
                }
                Badge {
                    text: project.status.label().to_string(),
                    variant: BadgeVariant::from(project.status),
                }
            }

            h3 { class: "card-title", "{project.title}" }
            p { class: "card-description", "{project.description}" }

            div {
                class: "meta",
                span {
                    class: "meta-item",
                    Icon { icon: FaClock, width: 14, height: 14 }
                    "{project.duration}"
                }
                span {
                    class: "meta-item",
                    Icon { icon: FaDollarSign, width: 14, height: 14 }
                    "{format_budget(project.budget)}"
                }
                span {
                    class: "meta-item",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    "{place}"
                }
                span {
                    class: "meta-item",
                    Icon { icon: FaUsers, width: 14, height: 14 }
                    "{project.proposals}"
                }
            }

            div {
                class: "row wrap",
                for skill in skills {
                    SkillTag { key: "{skill}", name: skill.clone(), small: true }
                }
                if more > 0 {
                    Badge { text: format!("+{more}"), small: true }
                }
            }
        }
    }
}
