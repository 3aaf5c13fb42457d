//! Learner profile input, as handed over by the profile screen.

use serde::{Deserialize, Serialize};

use crate::pod::split_skills;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub name: String,
    pub skills: Vec<String>,
}

impl LearnerProfile {
    pub fn new(name: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }

    /// Build a profile from the comma-separated skills field.
    ///
    /// Unlike pod skills, an empty list stays empty.
    pub fn from_skill_text(name: impl Into<String>, skills: &str) -> Self {
        Self::new(name, split_skills(skills))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_text_is_split_and_trimmed() {
        let profile = LearnerProfile::from_skill_text("Ada", " React,Node.js , ,UX");
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.skills, ["React", "Node.js", "UX"]);
    }

    #[test]
    fn empty_skill_text_gives_no_skills() {
        assert!(LearnerProfile::from_skill_text("Ada", "").skills.is_empty());
    }
}
