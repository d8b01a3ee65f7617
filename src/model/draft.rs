use super::position::Position;
use super::skill::Skill;

/// Live, session-scoped record of all form input values.
///
/// Text inputs stay raw strings until submission; position and skills are
/// typed because their widgets only produce catalog values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub position: Option<Position>,
    pub experience: String,
    pub portfolio: String,
    /// Selected skill tags, in selection order.
    pub skills: Vec<Skill>,
    pub interview_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.position, None);
        assert_eq!(draft.experience, "");
        assert_eq!(draft.portfolio, "");
        assert!(draft.skills.is_empty());
        assert_eq!(draft.interview_time, "");
    }
}
