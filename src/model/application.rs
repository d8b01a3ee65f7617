use serde::{Deserialize, Serialize};

use super::position::Position;
use super::skill::Skill;

/// Placeholder reported for the portfolio of non-Designer applicants.
pub const PORTFOLIO_PLACEHOLDER: &str = "N/A";

/// An immutable snapshot of a successfully submitted application.
///
/// Taken wholesale at the moment of submission; a later submission replaces
/// the previous snapshot rather than merging into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub position: Position,
    pub experience: String,
    pub portfolio: String,
    pub skills: Vec<Skill>,
    pub interview_time: String,
}

impl Application {
    /// Creates a submission snapshot from validated field values.
    ///
    /// The portfolio is only meaningful for Designer applicants; for every
    /// other position it is replaced by [`PORTFOLIO_PLACEHOLDER`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        phone: String,
        email: String,
        position: Position,
        experience: String,
        portfolio: String,
        skills: Vec<Skill>,
        interview_time: String,
    ) -> Self {
        let portfolio = if position.requires_portfolio() {
            portfolio
        } else {
            PORTFOLIO_PLACEHOLDER.to_string()
        };
        Self {
            name,
            phone,
            email,
            position,
            experience,
            portfolio,
            skills,
            interview_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_application(position: Position, portfolio: &str) -> Application {
        Application::new(
            "Harsh".to_string(),
            "9520691965".to_string(),
            "harsh@example.com".to_string(),
            position,
            "3".to_string(),
            portfolio.to_string(),
            vec![Skill::Javascript],
            "2024-05-01T10:00".to_string(),
        )
    }

    #[test]
    fn developer_portfolio_replaced_by_placeholder() {
        let app = make_application(Position::Developer, "https://port.example");
        assert_eq!(app.portfolio, "N/A");
    }

    #[test]
    fn manager_portfolio_replaced_by_placeholder() {
        let app = make_application(Position::Manager, "https://port.example");
        assert_eq!(app.portfolio, "N/A");
    }

    #[test]
    fn designer_portfolio_preserved() {
        let app = make_application(Position::Designer, "https://port.example");
        assert_eq!(app.portfolio, "https://port.example");
    }

    #[test]
    fn field_values_preserved() {
        let app = Application::new(
            "Ada".to_string(),
            "-12.5".to_string(),
            "ada@mail.example.io".to_string(),
            Position::Designer,
            "2.5".to_string(),
            "https://ada.example".to_string(),
            vec![Skill::Css, Skill::Html],
            "2024-06-02T09:30".to_string(),
        );
        assert_eq!(app.name, "Ada");
        assert_eq!(app.phone, "-12.5");
        assert_eq!(app.email, "ada@mail.example.io");
        assert_eq!(app.position, Position::Designer);
        assert_eq!(app.experience, "2.5");
        assert_eq!(app.portfolio, "https://ada.example");
        assert_eq!(app.skills, vec![Skill::Css, Skill::Html]);
        assert_eq!(app.interview_time, "2024-06-02T09:30");
    }

    #[test]
    fn serde_round_trip() {
        let app = make_application(Position::Designer, "https://port.example");
        let json = serde_json::to_string(&app).unwrap();
        let deserialized: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(app, deserialized);
    }
}
