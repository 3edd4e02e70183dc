//! # Domain models for the marketplace
//!
//! Plain data carried between the fixtures, the filters and the views. All types
//! are `Serialize + Deserialize` and use the camelCase field names of the
//! persisted/fixture JSON, so a stored session written by an older build of the
//! app still loads.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account: `id`, `name`, `email`. |
//! | [`Session`] | Who is logged in. Either `Anonymous` or `Authenticated(User)`; the `isAuthenticated` flag only exists in the serialized form. |
//! | [`Project`] | A job posting from the fixture catalog. Never mutated at runtime. |
//! | [`Conversation`] | One row of the messages list with its last message and unread count. |
//! | [`UserProfile`] | The profile/portfolio viewer's subject, with [`Skill`]s, [`Review`]s and [`PortfolioItem`]s. |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Authentication state of the app.
///
/// Serialized as `{"user": ..., "isAuthenticated": ...}`. When reading, the flag
/// is derived from `user` alone so the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SessionRecord", into = "SessionRecord")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    is_authenticated: bool,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        match record.user {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        let is_authenticated = session.is_authenticated();
        let user = match session {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        };
        SessionRecord {
            user,
            is_authenticated,
        }
    }
}

/// Lifecycle of a posted project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
}

/// A project listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub client_id: String,
    pub client_name: String,
    /// Empty when the client has no picture; the card then shows initials.
    pub client_avatar: String,
    /// Whole dollars.
    pub budget: u32,
    /// Free text: "2 weeks", "1 month".
    pub duration: String,
    pub due_date: NaiveDate,
    /// Ordered, no duplicates.
    pub skills: Vec<String>,
    pub status: ProjectStatus,
    pub remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub proposals: u32,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sender_id: String,
}

/// A conversation between the current user and one other party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// The current user comes first.
    pub participants: Vec<Participant>,
    pub last_message: LastMessage,
    pub unread_count: u32,
}

impl Conversation {
    /// The participant shown on the card: the second entry, or the first if the
    /// conversation only lists one.
    pub fn other_participant(&self) -> Option<&Participant> {
        self.participants.get(1).or_else(|| self.participants.first())
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub is_verified: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// 1 to 5.
    pub rating: f32,
    pub comment: String,
    pub date: NaiveDate,
    pub project_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub skills: Vec<String>,
}

/// The freelancer shown on the profile tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub rating: f32,
    pub reviews: Vec<Review>,
    pub portfolio: Vec<PortfolioItem>,
    pub location: String,
    pub completed_projects: u32,
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User {
            id: "7".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_session_serializes_with_flag() {
        let json = serde_json::to_string(&Session::Authenticated(jane())).unwrap();
        assert_eq!(
            json,
            r#"{"user":{"id":"7","name":"Jane","email":"jane@example.com"},"isAuthenticated":true}"#
        );

        let json = serde_json::to_string(&Session::Anonymous).unwrap();
        assert_eq!(json, r#"{"user":null,"isAuthenticated":false}"#);
    }

    #[test]
    fn test_session_flag_is_derived_from_user() {
        // A record claiming authentication without a user is anonymous.
        let session: Session =
            serde_json::from_str(r#"{"user":null,"isAuthenticated":true}"#).unwrap();
        assert_eq!(session, Session::Anonymous);
        assert!(!session.is_authenticated());

        let session: Session = serde_json::from_str(
            r#"{"user":{"id":"7","name":"Jane","email":"jane@example.com"},"isAuthenticated":false}"#,
        )
        .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&jane()));
    }

    #[test]
    fn test_project_status_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, r#""in-progress""#);
    }

    #[test]
    fn test_other_participant_falls_back_to_first() {
        let me = Participant {
            id: "user1".to_string(),
            name: "You".to_string(),
            avatar: String::new(),
        };
        let mut conversation = Conversation {
            id: "c".to_string(),
            participants: vec![me.clone()],
            last_message: LastMessage {
                text: "hi".to_string(),
                timestamp: DateTime::<Utc>::default(),
                sender_id: "user1".to_string(),
            },
            unread_count: 0,
        };
        assert_eq!(conversation.other_participant(), Some(&me));
        assert!(!conversation.has_unread());

        conversation.participants = Vec::new();
        assert!(conversation.other_participant().is_none());
    }
}
