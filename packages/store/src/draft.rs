//! Form state for posting a new project.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("add at least one skill")]
    NoSkills,
    #[error("budget must be a whole number")]
    InvalidBudget,
}

/// A validated project ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub budget: u32,
    pub duration: String,
    pub due_date: String,
    pub remote: bool,
    /// Always `None` for remote projects.
    pub location: Option<String>,
    pub skills: Vec<String>,
}

/// The "Create" tab's fields, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub budget: String,
    pub duration: String,
    pub due_date: String,
    pub remote: bool,
    pub location: String,
    /// Text of the skill box, not yet added.
    pub skill_input: String,
    skills: Vec<String>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            budget: String::new(),
            duration: String::new(),
            due_date: String::new(),
            remote: true,
            location: String::new(),
            skill_input: String::new(),
            skills: Vec::new(),
        }
    }
}

impl ProjectDraft {
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Move the pending skill input into the skill list.
    ///
    /// Blank or duplicate input is ignored and left in the box.
    pub fn add_skill(&mut self) -> bool {
        let skill = self.skill_input.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        self.skill_input.clear();
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    pub fn validate(&self) -> Result<NewProject, DraftError> {
        let title = required("Title", &self.title)?;
        let description = required("Description", &self.description)?;
        let budget = required("Budget", &self.budget)?;
        let duration = required("Duration", &self.duration)?;
        let due_date = required("Due date", &self.due_date)?;
        if self.skills.is_empty() {
            return Err(DraftError::NoSkills);
        }
        let budget = budget
            .trim_start_matches('$')
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidBudget)?;

        let location = if self.remote {
            None
        } else {
            Some(self.location.trim().to_string()).filter(|l| !l.is_empty())
        };

        Ok(NewProject {
            title: title.to_string(),
            description: description.to_string(),
            budget,
            duration: duration.to_string(),
            due_date: due_date.to_string(),
            remote: self.remote,
            location,
            skills: self.skills.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        Err(DraftError::MissingField(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectDraft {
        let mut draft = ProjectDraft {
            title: "Podcast Editing".to_string(),
            description: "Edit four episodes".to_string(),
            budget: "400".to_string(),
            duration: "2 weeks".to_string(),
            due_date: "2023-09-01".to_string(),
            ..ProjectDraft::default()
        };
        draft.skill_input = "Audio".to_string();
        draft.add_skill();
        draft
    }

    #[test]
    fn test_add_skill_trims_and_dedupes() {
        let mut draft = ProjectDraft::default();
        draft.skill_input = "  Rust ".to_string();
        assert!(draft.add_skill());
        assert_eq!(draft.skills(), ["Rust"]);
        assert!(draft.skill_input.is_empty());

        draft.skill_input = "Rust".to_string();
        assert!(!draft.add_skill());
        assert_eq!(draft.skill_input, "Rust");

        draft.skill_input = "   ".to_string();
        assert!(!draft.add_skill());
        assert_eq!(draft.skills().len(), 1);

        draft.remove_skill("Rust");
        assert!(draft.skills().is_empty());
    }

    #[test]
    fn test_validate_remote() {
        let mut draft = filled();
        draft.location = "ignored".to_string();
        let project = draft.validate().unwrap();
        assert_eq!(project.budget, 400);
        assert!(project.remote);
        assert_eq!(project.location, None);
        assert_eq!(project.skills, ["Audio"]);
    }

    #[test]
    fn test_validate_local_keeps_location() {
        let mut draft = filled();
        draft.remote = false;
        draft.location = " Oslo ".to_string();
        draft.budget = "$1200".to_string();
        let project = draft.validate().unwrap();
        assert_eq!(project.location.as_deref(), Some("Oslo"));
        assert_eq!(project.budget, 1200);
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut draft = filled();
        draft.title = " ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("Title")));

        let mut draft = filled();
        draft.due_date.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("Due date")));

        let mut draft = filled();
        draft.remove_skill("Audio");
        assert_eq!(draft.validate(), Err(DraftError::NoSkills));

        let mut draft = filled();
        draft.budget = "a lot".to_string();
        assert_eq!(draft.validate(), Err(DraftError::InvalidBudget));
    }

    #[test]
    fn test_reset() {
        let mut draft = filled();
        draft.remote = false;
        draft.reset();
        assert_eq!(draft, ProjectDraft::default());
        assert!(draft.remote);
    }
}
