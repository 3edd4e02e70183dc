use dioxus::prelude::*;
use store::format::initials;

use crate::icons::FaCircleCheck;
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Sm => "avatar avatar-sm",
            AvatarSize::Md => "avatar avatar-md",
            AvatarSize::Lg => "avatar avatar-lg",
            AvatarSize::Xl => "avatar avatar-xl",
        }
    }
}

/// A round picture, or the first letter of `name` when `uri` is empty.
#[component]
pub fn Avatar(
    uri: String,
    name: String,
    #[props(default)] size: AvatarSize,
    #[props(default)] verified: bool,
) -> Element {
    rsx! {
        div {
            class: size.class(),
            if uri.is_empty() {
                span { "{initials(&name)}" }
            } else {
                img { src: "{uri}", alt: "{name}" }
            }
            if verified {
                span {
                    class: "avatar-verified",
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                }
            }
        }
    }
}
