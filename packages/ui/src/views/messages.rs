use chrono::Utc;
use dioxus::prelude::*;
use store::fixtures;

use crate::components::ConversationCard;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn MessagesView(on_open_conversation: EventHandler<String>) -> Element {
    let conversations = use_signal(fixtures::conversations);
    let now = Utc::now();

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-header",
                h1 { class: "screen-title", "Messages" }
                Icon { icon: FaMagnifyingGlass, width: 22, height: 22 }
            }

            div {
                class: "content",
                if conversations.read().is_empty() {
                    div {
                        class: "empty",
                        h3 { "No messages yet" }
                        p { class: "muted", "Your messages with clients and freelancers will appear here." }
                    }
                }
                for conversation in conversations() {
                    ConversationCard {
                        key: "{conversation.id}",
                        conversation: conversation.clone(),
                        now: now,
                        on_press: on_open_conversation,
                    }
                }
            }
        }
    }
}
