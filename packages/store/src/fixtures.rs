//! Static catalog, inbox and profile data shown by the app.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Conversation, LastMessage, Participant, PortfolioItem, Project, ProjectStatus, Review, Skill,
    SkillLevel, UserProfile,
};

const AVATAR_SARAH: &str = "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const AVATAR_ALEX: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const AVATAR_TECH: &str = "https://images.pexels.com/photos/2381069/pexels-photo-2381069.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const AVATAR_MARIA: &str = "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const AVATAR_WEBFIX: &str = "https://images.pexels.com/photos/4195342/pexels-photo-4195342.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

/// Id of the signed-in party in every fixture conversation.
pub const CURRENT_USER_ID: &str = "user1";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The project catalog, newest first.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj1".to_string(),
            title: "Landing Page Design".to_string(),
            description: "We need a modern, conversion-focused landing page for our new SaaS product. Design only; our team handles the build.".to_string(),
            client_id: "user4".to_string(),
            client_name: "TechSolutions Inc.".to_string(),
            client_avatar: AVATAR_TECH.to_string(),
            budget: 1200,
            duration: "2 weeks".to_string(),
            due_date: date(2023, 8, 1),
            skills: strings(&["Web Design", "UI Design", "Figma"]),
            status: ProjectStatus::Open,
            remote: true,
            location: None,
            proposals: 8,
            created_at: at("2023-07-14T09:00:00Z"),
        },
        Project {
            id: "proj2".to_string(),
            title: "Mobile App UI Redesign".to_string(),
            description: "Refresh the interface of our fitness tracking app for iOS and Android, including onboarding and the workout log.".to_string(),
            client_id: "user2".to_string(),
            client_name: "Sarah Johnson".to_string(),
            client_avatar: AVATAR_SARAH.to_string(),
            budget: 2500,
            duration: "1 month".to_string(),
            due_date: date(2023, 8, 20),
            skills: strings(&["UI Design", "Mobile Development", "Prototyping", "Figma"]),
            status: ProjectStatus::Open,
            remote: true,
            location: None,
            proposals: 14,
            created_at: at("2023-07-13T15:30:00Z"),
        },
        Project {
            id: "proj3".to_string(),
            title: "WordPress Bug Fixes".to_string(),
            description: "Fix layout issues and a broken contact form on an existing WordPress site after a theme update.".to_string(),
            client_id: "user6".to_string(),
            client_name: "WebFix Solutions".to_string(),
            client_avatar: AVATAR_WEBFIX.to_string(),
            budget: 300,
            duration: "3 days".to_string(),
            due_date: date(2023, 7, 20),
            skills: strings(&["WordPress", "PHP", "CSS"]),
            status: ProjectStatus::InProgress,
            remote: true,
            location: None,
            proposals: 5,
            created_at: at("2023-07-12T11:00:00Z"),
        },
        Project {
            id: "proj4".to_string(),
            title: "E-commerce Storefront in React".to_string(),
            description: "Build the product listing, cart and checkout pages for a boutique clothing store using React and an existing REST API.".to_string(),
            client_id: "user5".to_string(),
            client_name: "Maria Garcia".to_string(),
            client_avatar: AVATAR_MARIA.to_string(),
            budget: 4000,
            duration: "6 weeks".to_string(),
            due_date: date(2023, 9, 15),
            skills: strings(&["React", "JavaScript", "CSS", "Web Design"]),
            status: ProjectStatus::Open,
            remote: false,
            location: Some("Barcelona, Spain".to_string()),
            proposals: 21,
            created_at: at("2023-07-11T08:45:00Z"),
        },
        Project {
            id: "proj5".to_string(),
            title: "Blog Content Writing".to_string(),
            description: "Write eight SEO-friendly articles about remote work and productivity for a company blog.".to_string(),
            client_id: "user3".to_string(),
            client_name: "Alex Chen".to_string(),
            client_avatar: AVATAR_ALEX.to_string(),
            budget: 800,
            duration: "3 weeks".to_string(),
            due_date: date(2023, 8, 10),
            skills: strings(&["Content Writing", "Marketing"]),
            status: ProjectStatus::Completed,
            remote: true,
            location: None,
            proposals: 32,
            created_at: at("2023-07-08T13:20:00Z"),
        },
        Project {
            id: "proj6".to_string(),
            title: "Logo and Brand Identity".to_string(),
            description: "Create a logo, colour palette and simple brand guide for a neighbourhood coffee roastery.".to_string(),
            client_id: "user7".to_string(),
            client_name: "Bean There Coffee".to_string(),
            client_avatar: String::new(),
            budget: 650,
            duration: "2 weeks".to_string(),
            due_date: date(2023, 8, 5),
            skills: strings(&["Logo Design", "Branding"]),
            status: ProjectStatus::Open,
            remote: false,
            location: Some("Portland, OR".to_string()),
            proposals: 11,
            created_at: at("2023-07-07T10:10:00Z"),
        },
        Project {
            id: "proj7".to_string(),
            title: "Python Data Pipeline".to_string(),
            description: "Automate a nightly import of sales spreadsheets into PostgreSQL and produce a weekly summary report.".to_string(),
            client_id: "user4".to_string(),
            client_name: "TechSolutions Inc.".to_string(),
            client_avatar: AVATAR_TECH.to_string(),
            budget: 1800,
            duration: "1 month".to_string(),
            due_date: date(2023, 9, 1),
            skills: strings(&["Python", "SQL", "Automation"]),
            status: ProjectStatus::Open,
            remote: false,
            location: Some("Austin, TX".to_string()),
            proposals: 6,
            created_at: at("2023-07-05T16:00:00Z"),
        },
    ]
}

fn conversation(
    id: &str,
    other: (&str, &str, &str),
    text: &str,
    timestamp: &str,
    sender_id: &str,
    unread_count: u32,
) -> Conversation {
    let (other_id, other_name, other_avatar) = other;
    Conversation {
        id: id.to_string(),
        participants: vec![
            Participant {
                id: CURRENT_USER_ID.to_string(),
                name: "You".to_string(),
                avatar: String::new(),
            },
            Participant {
                id: other_id.to_string(),
                name: other_name.to_string(),
                avatar: other_avatar.to_string(),
            },
        ],
        last_message: LastMessage {
            text: text.to_string(),
            timestamp: at(timestamp),
            sender_id: sender_id.to_string(),
        },
        unread_count,
    }
}

/// The messages tab inbox.
pub fn conversations() -> Vec<Conversation> {
    vec![
        conversation(
            "conv1",
            ("user2", "Sarah Johnson", AVATAR_SARAH),
            "I'd like to discuss the details of the UI design project. Are you available for a call tomorrow?",
            "2023-07-15T10:30:00Z",
            "user2",
            2,
        ),
        conversation(
            "conv2",
            ("user3", "Alex Chen", AVATAR_ALEX),
            "The project has been completed and I've submitted the final files. Please let me know if you need any revisions.",
            "2023-07-14T16:45:00Z",
            CURRENT_USER_ID,
            0,
        ),
        conversation(
            "conv3",
            ("user4", "TechSolutions Inc.", AVATAR_TECH),
            "Your proposal for our landing page project looks great. I have a few questions about the timeline.",
            "2023-07-15T09:15:00Z",
            "user4",
            1,
        ),
        conversation(
            "conv4",
            ("user5", "Maria Garcia", AVATAR_MARIA),
            "Thanks for the feedback! I'll implement the changes and send you an updated version by tomorrow.",
            "2023-07-13T14:20:00Z",
            CURRENT_USER_ID,
            0,
        ),
        conversation(
            "conv5",
            ("user6", "WebFix Solutions", AVATAR_WEBFIX),
            "We've reviewed your application and would like to proceed with the WordPress bug fixes. When can you start?",
            "2023-07-14T11:50:00Z",
            "user6",
            3,
        ),
    ]
}

/// The freelancer on the profile tab.
pub fn user_profile() -> UserProfile {
    UserProfile {
        id: CURRENT_USER_ID.to_string(),
        name: "Jordan Taylor".to_string(),
        username: "jordantaylor".to_string(),
        avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
        bio: "Product designer and front-end developer with six years of experience helping startups ship clean, accessible interfaces.".to_string(),
        skills: vec![
            Skill {
                id: "s1".to_string(),
                name: "UI Design".to_string(),
                level: SkillLevel::Expert,
                is_verified: true,
            },
            Skill {
                id: "s2".to_string(),
                name: "React".to_string(),
                level: SkillLevel::Expert,
                is_verified: true,
            },
            Skill {
                id: "s3".to_string(),
                name: "Web Design".to_string(),
                level: SkillLevel::Intermediate,
                is_verified: false,
            },
            Skill {
                id: "s4".to_string(),
                name: "Content Writing".to_string(),
                level: SkillLevel::Beginner,
                is_verified: false,
            },
        ],
        rating: 4.8,
        reviews: vec![
            Review {
                id: "r1".to_string(),
                user_id: "user2".to_string(),
                user_name: "Sarah Johnson".to_string(),
                user_avatar: AVATAR_SARAH.to_string(),
                rating: 5.0,
                comment: "Delivered ahead of schedule and the designs were spot on.".to_string(),
                date: date(2023, 6, 28),
                project_id: "proj2".to_string(),
            },
            Review {
                id: "r2".to_string(),
                user_id: "user5".to_string(),
                user_name: "Maria Garcia".to_string(),
                user_avatar: AVATAR_MARIA.to_string(),
                rating: 4.5,
                comment: "Great communication and clean React code. Would hire again.".to_string(),
                date: date(2023, 5, 17),
                project_id: "proj4".to_string(),
            },
        ],
        portfolio: vec![
            PortfolioItem {
                id: "p1".to_string(),
                title: "Finance Dashboard".to_string(),
                description: "Responsive analytics dashboard for a personal finance startup.".to_string(),
                image_url: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                link: Some("https://example.com/finance-dashboard".to_string()),
                skills: strings(&["UI Design", "React"]),
            },
            PortfolioItem {
                id: "p2".to_string(),
                title: "Travel App Concept".to_string(),
                description: "Mobile concept for planning group trips.".to_string(),
                image_url: "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                link: None,
                skills: strings(&["UI Design", "Mobile Development"]),
            },
        ],
        location: "Lisbon, Portugal".to_string(),
        completed_projects: 37,
        verified: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let projects = projects();
        let ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_projects_are_consistent() {
        for project in projects() {
            let unique: HashSet<_> = project.skills.iter().collect();
            assert_eq!(unique.len(), project.skills.len(), "{}", project.id);
            // Local projects say where; remote ones don't.
            assert_eq!(project.location.is_some(), !project.remote, "{}", project.id);
            assert_ne!(project.due_date, NaiveDate::default());
        }
    }

    #[test]
    fn test_conversations_put_current_user_first() {
        for conversation in conversations() {
            assert_eq!(conversation.participants[0].id, CURRENT_USER_ID);
            assert_ne!(conversation.other_participant().unwrap().id, CURRENT_USER_ID);
            assert_ne!(conversation.last_message.timestamp, DateTime::<Utc>::default());
        }
    }

    #[test]
    fn test_fixture_dates_parse() {
        // A malformed date in the tables falls back to the epoch.
        for project in projects() {
            assert_ne!(project.due_date, NaiveDate::default(), "{}", project.id);
            assert_ne!(project.created_at, DateTime::<Utc>::default(), "{}", project.id);
        }
        for conversation in conversations() {
            assert_ne!(
                conversation.last_message.timestamp,
                DateTime::<Utc>::default(),
                "{}",
                conversation.id
            );
        }
        let profile = user_profile();
        assert!(!profile.reviews.is_empty());
        for review in profile.reviews {
            assert_ne!(review.date, NaiveDate::default(), "{}", review.id);
        }
    }

    #[test]
    fn test_landing_page_is_searchable() {
        use crate::catalog::{filter_projects, Query};

        let projects = projects();
        let found = filter_projects(&projects, &Query::new("landing"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Landing Page Design");
    }
}
