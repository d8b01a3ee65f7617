use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill tags a candidate can check off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Javascript,
    Html,
    Css,
}

static ALL_SKILLS: &[Skill] = &[Skill::Javascript, Skill::Html, Skill::Css];

impl Skill {
    /// Returns the tag value stored in a submission (lowercase).
    pub fn value(&self) -> &'static str {
        match self {
            Skill::Javascript => "javascript",
            Skill::Html => "html",
            Skill::Css => "css",
        }
    }

    /// Returns the checkbox label shown next to the tag.
    pub fn label(&self) -> &'static str {
        match self {
            Skill::Javascript => "Javascript",
            Skill::Html => "HTML",
            Skill::Css => "CSS",
        }
    }

    /// Returns all skills, in checkbox order.
    pub fn all() -> &'static [Skill] {
        ALL_SKILLS
    }
}

#[mutants::skip]
impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Joins skill tags for display, in the order they were selected.
pub fn join_skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(Skill::value)
        .collect::<Vec<_>>()
        .join(", ")
}
