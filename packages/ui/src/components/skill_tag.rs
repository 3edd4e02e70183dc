use dioxus::prelude::*;
use store::models::SkillLevel;

use crate::icons::FaCircleCheck;
use crate::Icon;

/// A skill chip. Becomes a toggle when `onclick` is given.
#[component]
pub fn SkillTag(
    name: String,
    #[props(default)] level: SkillLevel,
    #[props(default)] verified: bool,
    #[props(default)] small: bool,
    #[props(default)] selected: bool,
    onclick: Option<EventHandler<String>>,
) -> Element {
    let level_class = match level {
        SkillLevel::Beginner => "skill-beginner",
        SkillLevel::Intermediate => "skill-intermediate",
        SkillLevel::Expert => "skill-expert",
    };
    let mut class = format!("skill-tag {level_class}");
    if small {
        class.push_str(" skill-tag-small");
    }
    if selected {
        class.push_str(" skill-tag-selected");
    }

    let label = rsx! {
        span { "{name}" }
        if verified {
            Icon { icon: FaCircleCheck, width: 12, height: 12 }
        }
    };

    match onclick {
        Some(handler) => rsx! {
            button {
                class: "{class}",
                onclick: move |_| handler.call(name.clone()),
                {label}
            }
        },
        None => rsx! {
            span { class: "{class}", {label} }
        },
    }
}
