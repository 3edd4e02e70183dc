use dioxus::prelude::*;
use store::ProjectStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    #[default]
    Neutral,
}

impl From<ProjectStatus> for BadgeVariant {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Open => BadgeVariant::Success,
            ProjectStatus::InProgress => BadgeVariant::Warning,
            ProjectStatus::Completed => BadgeVariant::Neutral,
        }
    }
}

#[component]
pub fn Badge(
    text: String,
    #[props(default)] variant: BadgeVariant,
    #[props(default)] small: bool,
) -> Element {
    let variant_class = match variant {
        BadgeVariant::Success => "badge-success",
        BadgeVariant::Warning => "badge-warning",
        BadgeVariant::Neutral => "badge-neutral",
    };
    let size_class = if small { " badge-small" } else { "" };

    rsx! {
        span { class: "badge {variant_class}{size_class}", "{text}" }
    }
}
