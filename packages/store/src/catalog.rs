//! # Catalog filtering
//!
//! Two filters over the fixture project list, both pure and order-preserving:
//!
//! - [`Query`] backs the search tab: a free-text box plus toggleable skill chips.
//!   A project matches when the text is empty or appears (case-insensitively)
//!   in its title or description, **and** no skills are selected or at least
//!   one selected skill is listed on the project (exact, case-sensitive).
//! - [`LocationFilter`] backs the discovery feed's All / Remote / Local buttons.
//!
//! Neither can fail: an empty axis matches everything.

use serde::{Deserialize, Serialize};

use crate::models::Project;

/// Skill chips offered on the search tab before the user types anything.
pub const POPULAR_SKILLS: [&str; 10] = [
    "Web Design",
    "Mobile Development",
    "Content Writing",
    "UI Design",
    "Logo Design",
    "WordPress",
    "JavaScript",
    "React",
    "Python",
    "Marketing",
];

/// The search tab's input state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    /// Kept in selection order for display; never holds duplicates.
    selected_skills: Vec<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected_skills: Vec::new(),
        }
    }

    /// Builder method to preselect skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            let skill = skill.into();
            if !self.is_selected(&skill) {
                self.selected_skills.push(skill);
            }
        }
        self
    }

    pub fn selected_skills(&self) -> &[String] {
        &self.selected_skills
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selected_skills.iter().any(|s| s == skill)
    }

    /// Select the skill, or deselect it if it already is.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.selected_skills.iter().position(|s| s == skill) {
            self.selected_skills.remove(pos);
        } else {
            self.selected_skills.push(skill.to_string());
        }
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// No text and no skills: the search tab shows the popular chips.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.selected_skills.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_text(project) && self.matches_skills(project)
    }

    fn matches_text(&self, project: &Project) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
    }

    fn matches_skills(&self, project: &Project) -> bool {
        self.selected_skills.is_empty()
            || self.selected_skills.iter().any(|skill| project.has_skill(skill))
    }
}

/// Projects matching `query`, in catalog order.
pub fn filter_projects<'a>(projects: &'a [Project], query: &Query) -> Vec<&'a Project> {
    projects.iter().filter(|p| query.matches(p)).collect()
}

/// "1 project found" / "3 projects found".
pub fn results_summary(count: usize) -> String {
    if count == 1 {
        "1 project found".to_string()
    } else {
        format!("{count} projects found")
    }
}

/// The discovery feed's location selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationFilter {
    #[default]
    All,
    Remote,
    Local,
}

impl LocationFilter {
    pub const ALL: [LocationFilter; 3] = [
        LocationFilter::All,
        LocationFilter::Remote,
        LocationFilter::Local,
    ];

    pub fn matches(self, project: &Project) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Remote => project.remote,
            LocationFilter::Local => !project.remote,
        }
    }

    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Button caption on the feed.
    pub fn label(self) -> &'static str {
        match self {
            LocationFilter::All => "All Projects",
            LocationFilter::Remote => "Remote Only",
            LocationFilter::Local => "Local",
        }
    }
}
