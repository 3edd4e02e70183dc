//! Reusable building blocks for the views.

mod avatar;
pub use avatar::{Avatar, AvatarSize};

mod badge;
pub use badge::{Badge, BadgeVariant};

mod button;
pub use button::{Button, ButtonSize, ButtonVariant};

mod skill_tag;
pub use skill_tag::SkillTag;

mod project_card;
pub use project_card::ProjectCard;

mod conversation_card;
pub use conversation_card::ConversationCard;
