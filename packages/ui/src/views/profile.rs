//! Profile and portfolio viewer for the signed-in freelancer.

use dioxus::prelude::*;
use store::fixtures;
use store::format::format_date;

use crate::components::{Avatar, AvatarSize, Button, ButtonSize, ButtonVariant, SkillTag};
use crate::icons::{FaArrowUpRightFromSquare, FaGear, FaLocationDot, FaStar};
use crate::{sign_out, use_session, Icon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Portfolio,
    Reviews,
}

#[component]
pub fn ProfileView(on_edit_profile: EventHandler<()>) -> Element {
    let mut session = use_session();
    let profile = use_signal(fixtures::user_profile);
    let mut active_tab = use_signal(ProfileTab::default);

    let profile = profile();
    let tab_class = |tab: ProfileTab| {
        if active_tab() == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-header",
                h1 { class: "screen-title", "Profile" }
                Icon { icon: FaGear, width: 22, height: 22 }
            }

            div {
                class: "profile-header",
                Avatar {
                    uri: profile.avatar.clone(),
                    name: profile.name.clone(),
                    size: AvatarSize::Xl,
                    verified: profile.verified,
                }
                h2 { style: "margin: 8px 0 0;", "{profile.name}" }
                span { class: "muted", "@{profile.username}" }
                span {
                    class: "meta-item muted",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    "{profile.location}"
                }
                span {
                    class: "meta-item",
                    Icon { icon: FaStar, width: 14, height: 14, fill: "var(--accent)" }
                    "{profile.rating} ({profile.reviews.len()} reviews)"
                }
                div {
                    style: "text-align: center; margin: 8px 0;",
                    strong { style: "font-size: 20px;", "{profile.completed_projects}" }
                    div { class: "muted", "Projects" }
                }
                div {
                    class: "row",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Md,
                        onclick: move |_| on_edit_profile.call(()),
                        "Edit Profile"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Md,
                        onclick: move |_| sign_out(&mut session),
                        "Sign Out"
                    }
                }
            }

            div {
                class: "content",
                h2 { class: "section-title", "About" }
                p { "{profile.bio}" }

                h2 { class: "section-title", "Skills" }
                div {
                    class: "row wrap",
                    for skill in profile.skills.iter() {
                        SkillTag {
                            key: "{skill.id}",
                            name: skill.name.clone(),
                            level: skill.level,
                            verified: skill.is_verified,
                        }
                    }
                }

                div {
                    class: "tabs",
                    button {
                        class: tab_class(ProfileTab::Portfolio),
                        onclick: move |_| active_tab.set(ProfileTab::Portfolio),
                        "Portfolio"
                    }
                    button {
                        class: tab_class(ProfileTab::Reviews),
                        onclick: move |_| active_tab.set(ProfileTab::Reviews),
                        "Reviews"
                    }
                }

                {match active_tab() {
                    ProfileTab::Portfolio => rsx! {
                        for item in profile.portfolio.iter() {
                            div {
                                key: "{item.id}",
                                class: "card",
                                img { class: "portfolio-image", src: "{item.image_url}", alt: "{item.title}" }
                                h3 { class: "card-title", "{item.title}" }
                                p { class: "card-description", "{item.description}" }
                                div {
                                    class: "row wrap",
                                    for skill in item.skills.iter() {
                                        SkillTag { key: "{skill}", name: skill.clone(), small: true }
                                    }
                                }
                                if let Some(link) = &item.link {
                                    a {
                                        class: "meta-item link",
                                        href: "{link}",
                                        "View project "
                                        Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    },
                    ProfileTab::Reviews => rsx! {
                        for review in profile.reviews.iter() {
                            div {
                                key: "{review.id}",
                                class: "card",
                                div {
                                    class: "card-header",
                                    div {
                                        class: "row",
                                        Avatar {
                                            uri: review.user_avatar.clone(),
                                            name: review.user_name.clone(),
                                            size: AvatarSize::Sm,
                                        }
                                        strong { "{review.user_name}" }
                                    }
                                    span {
                                        class: "meta-item",
                                        Icon { icon: FaStar, width: 12, height: 12, fill: "var(--accent)" }
                                        "{review.rating}"
                                    }
                                }
                                p { "{review.comment}" }
                                span { class: "muted", "{format_date(review.date)}" }
                            }
                        }
                    },
                }}
            }
        }
    }
}
