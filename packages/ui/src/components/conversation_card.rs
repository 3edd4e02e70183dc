use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::format::format_timestamp;
use store::Conversation;

use super::{Avatar, AvatarSize};

/// One row of the inbox. Highlighted while it has unread messages.
#[component]
pub fn ConversationCard(
    conversation: Conversation,
    now: DateTime<Utc>,
    on_press: EventHandler<String>,
) -> Element {
    let (name, avatar) = conversation
        .other_participant()
        .map(|p| (p.name.clone(), p.avatar.clone()))
        .unwrap_or_default();
    let when = format_timestamp(conversation.last_message.timestamp, now);
    let unread = conversation.has_unread();
    let id = conversation.id.clone();

    rsx! {
        div {
            class: if unread { "card card-unread row" } else { "card row" },
            onclick: move |_| on_press.call(id.clone()),

            Avatar { uri: avatar, name: name.clone(), size: AvatarSize::Md }

            div {
                style: "flex: 1; min-width: 0;",
                div {
                    class: "card-header",
                    style: "margin-bottom: 0;",
                    strong { "{name}" }
                    span { class: "muted", "{when}" }
                }
                div {
                    class: "row",
                    p {
                        class: "message-preview",
                        style: if unread { "flex: 1; font-weight: 500;" } else { "flex: 1; color: var(--sub-text);" },
                        "{conversation.last_message.text}"
                    }
                    if unread {
                        span { class: "unread-count", "{conversation.unread_count}" }
                    }
                }
            }
        }
    }
}
