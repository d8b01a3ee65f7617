use std::fmt;

use serde::{Deserialize, Serialize};

/// Position a candidate can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

static ALL_POSITIONS: &[Position] = &[Position::Developer, Position::Designer, Position::Manager];

impl Position {
    /// Returns the display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Returns all positions, in selector order.
    pub fn all() -> &'static [Position] {
        ALL_POSITIONS
    }

    /// Whether applicants for this position must state relevant experience.
    pub fn requires_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }

    /// Whether applicants for this position must provide a portfolio URL.
    pub fn requires_portfolio(&self) -> bool {
        matches!(self, Position::Designer)
    }
}

#[mutants::skip]
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
